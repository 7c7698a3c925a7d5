//! 페이지네이션 타입
//!
//! 요청 파라미터 정규화(`PageRequest`), 조회 결과(`Page<T>`),
//! 응답 헤더 메타데이터(`PaginationHeader`)를 정의합니다.

use serde::Serialize;

use crate::config::PaginationConfig;

/// 정규화된 페이지 요청
///
/// `page_number >= 1`, `1 <= page_size <= MAX_PAGE_SIZE`가 항상 성립합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: PaginationConfig::DEFAULT_PAGE_NUMBER,
            page_size: PaginationConfig::DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// 쿼리 값에 기본값과 범위 제한을 적용합니다.
    ///
    /// 값이 없으면 기본값(1, 10)을, 범위를 벗어나면 가장 가까운 유효값을 사용합니다.
    pub fn normalized(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let defaults = Self::default();
        let page_number = page_number
            .unwrap_or(i64::from(defaults.page_number))
            .clamp(1, i64::from(u32::MAX));
        let page_size = page_size
            .unwrap_or(i64::from(defaults.page_size))
            .clamp(1, i64::from(PaginationConfig::MAX_PAGE_SIZE));

        Self {
            page_number: page_number as u32,
            page_size: page_size as u32,
        }
    }

    /// 현재 페이지 앞에 건너뛸 항목 수
    pub fn offset(&self) -> usize {
        (self.page_number.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }
}

/// 한 페이지 분량의 조회 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, current_page: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(page_size)).min(u64::from(u32::MAX)) as u32
        };

        Self {
            items,
            current_page,
            page_size,
            total_count,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 페이지 메타데이터를 유지한 채 항목을 변환합니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

/// `X-Pagination` 응답 헤더 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationHeader {
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
    pub total_count: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationHeader {
    /// 페이지 정보로 헤더를 구성합니다.
    ///
    /// `link`는 페이지 번호를 받아 해당 페이지의 절대 URL을 만듭니다.
    /// 이전/다음 페이지가 없으면 링크는 `null`입니다.
    pub fn for_page<T, F>(page: &Page<T>, link: F) -> Self
    where
        F: Fn(u32) -> String,
    {
        Self {
            previous_page_link: page
                .has_previous()
                .then(|| link(page.current_page - 1)),
            next_page_link: page.has_next().then(|| link(page.current_page + 1)),
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages,
        }
    }
}
