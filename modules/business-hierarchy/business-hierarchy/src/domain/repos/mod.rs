use business_hierarchy_sdk::{ListQuery, SortOrder};

mod brands_repo;
mod collaborators_repo;
mod economic_groups_repo;
mod units_repo;

pub use brands_repo::BrandsRepository;
pub use collaborators_repo::CollaboratorsRepository;
pub use economic_groups_repo::EconomicGroupsRepository;
pub use units_repo::UnitsRepository;

/// Hard ceiling for any page size, whatever the configuration says.
pub const PER_PAGE_CEILING: u64 = 1000;

/// Largest row offset the store drivers accept (signed 64-bit).
pub const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Listing window resolved by the service from a caller's `ListQuery`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based.
    pub page: u64,
    pub per_page: u64,
    pub search: Option<String>,
    pub order: SortOrder,
}

impl PageRequest {
    /// Apply defaults and bounds to a caller query.
    #[must_use]
    pub fn resolve(query: ListQuery, default_per_page: u64, max_per_page: u64) -> Self {
        let per_page = query
            .per_page
            .unwrap_or(default_per_page)
            .clamp(1, max_per_page.clamp(1, PER_PAGE_CEILING));
        Self {
            page: query.page.max(1),
            per_page,
            search: query
                .search
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty()),
            order: query.order,
        }
    }

    /// Rows to skip, or `None` when the window starts beyond anything the
    /// store can address (such a page is necessarily empty).
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        (self.page - 1)
            .checked_mul(self.per_page)
            .filter(|offset| *offset <= MAX_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_default_and_bounds() {
        let req = PageRequest::resolve(ListQuery::default(), 10, 100);
        assert_eq!((req.page, req.per_page), (1, 10));

        let req = PageRequest::resolve(ListQuery::default().page(0).per_page(500), 10, 100);
        assert_eq!((req.page, req.per_page), (1, 100));

        let req = PageRequest::resolve(ListQuery::default().per_page(0), 10, 100);
        assert_eq!(req.per_page, 1);
    }

    #[test]
    fn configured_maximum_is_capped() {
        let req = PageRequest::resolve(ListQuery::default().per_page(u64::MAX), 10, u64::MAX);
        assert_eq!(req.per_page, PER_PAGE_CEILING);
    }

    #[test]
    fn offset_beyond_store_range_is_none() {
        let req = PageRequest::resolve(ListQuery::default().page(3).per_page(20), 10, 100);
        assert_eq!(req.offset(), Some(40));

        let req = PageRequest::resolve(ListQuery::default().page(u64::MAX), 10, 100);
        assert_eq!(req.offset(), None);

        let req = PageRequest::resolve(ListQuery::default().page(u64::MAX).per_page(1), 10, 100);
        assert_eq!(req.offset(), None);
    }

    #[test]
    fn blank_search_is_dropped() {
        let req = PageRequest::resolve(ListQuery::default().search("  "), 10, 100);
        assert_eq!(req.search, None);
        let req = PageRequest::resolve(ListQuery::default().search(" Ana "), 10, 100);
        assert_eq!(req.search.as_deref(), Some("Ana"));
    }
}
