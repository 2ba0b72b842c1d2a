//! クライアント側ページ送り

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1ページあたりの表示件数（2/4/6/8のいずれか）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ItemsPerPage(u8);

impl ItemsPerPage {
    pub const CHOICES: [u8; 4] = [2, 4, 6, 8];

    pub fn new(value: u8) -> Result<Self> {
        if Self::CHOICES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidItemsPerPage(value))
        }
    }

    pub fn all() -> impl Iterator<Item = ItemsPerPage> {
        Self::CHOICES.into_iter().map(ItemsPerPage)
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Default for ItemsPerPage {
    fn default() -> Self {
        Self(6)
    }
}

impl TryFrom<u8> for ItemsPerPage {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ItemsPerPage> for u8 {
    fn from(value: ItemsPerPage) -> Self {
        value.0
    }
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ページ送りの方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    pub fn delta(&self) -> i64 {
        match self {
            PageDirection::Previous => -1,
            PageDirection::Next => 1,
        }
    }
}

/// 総ページ数 = ceil(件数 / 表示件数)。0件でも1ページとして扱う。
pub fn total_pages(item_count: usize, per_page: ItemsPerPage) -> usize {
    item_count.div_ceil(per_page.get()).max(1)
}

/// ページ番号を [1, 総ページ数] に収める
pub fn clamp_page(page: usize, item_count: usize, per_page: ItemsPerPage) -> usize {
    page.clamp(1, total_pages(item_count, per_page))
}

/// 現在ページから1ページ送った結果（範囲外には出ない）
pub fn step_page(page: usize, direction: PageDirection, item_count: usize, per_page: ItemsPerPage) -> usize {
    let current = clamp_page(page, item_count, per_page) as i64;
    let target = (current + direction.delta()).max(1) as usize;
    clamp_page(target, item_count, per_page)
}

/// 指定ページに表示する範囲
pub fn page_range(page: usize, item_count: usize, per_page: ItemsPerPage) -> std::ops::Range<usize> {
    let page = clamp_page(page, item_count, per_page);
    let start = ((page - 1) * per_page.get()).min(item_count);
    let end = (start + per_page.get()).min(item_count);
    start..end
}
