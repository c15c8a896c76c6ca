use serde::Deserialize;

pub const MAX_ITEMS_PER_PAGE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDir {
    Asc,
    Desc,
}

impl OrderDir {
    pub fn as_sql(self) -> &'static str {
        match self {
            OrderDir::Asc => "ASC",
            OrderDir::Desc => "DESC",
        }
    }
}

/// Raw list query parameters. Invalid values are clamped during
/// normalization, never rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<i64>,
    pub items_per_page: Option<i64>,
    pub deleted: Option<bool>,
    pub order_key: Option<String>,
    pub order_value: Option<String>,
}

/// Normalized, store-safe pagination. `order_key` is always a member of the
/// entity's whitelist, so it can be interpolated into SQL.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub include_deleted: bool,
    pub order_key: &'static str,
    pub order_dir: OrderDir,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        // page is floor-clamped to 1 but has no upper bound; saturate so an
        // absurd page number yields an empty page instead of overflowing.
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn total_pages(&self, total_count: i64) -> i64 {
        if total_count == 0 {
            0
        } else {
            (total_count + self.per_page - 1) / self.per_page
        }
    }
}

impl PageQuery {
    pub fn normalize(
        &self,
        default_per_page: i64,
        order_keys: &'static [&'static str],
        default_order: (&'static str, OrderDir),
    ) -> Pagination {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self
            .items_per_page
            .unwrap_or(default_per_page)
            .clamp(1, MAX_ITEMS_PER_PAGE);

        let order_key = self
            .order_key
            .as_deref()
            .and_then(|requested| order_keys.iter().find(|k| **k == requested))
            .copied()
            .unwrap_or(default_order.0);

        let order_dir = match self.order_value.as_deref() {
            Some(v) if v.eq_ignore_ascii_case("asc") => OrderDir::Asc,
            Some(v) if v.eq_ignore_ascii_case("desc") => OrderDir::Desc,
            _ => default_order.1,
        };

        Pagination {
            page,
            per_page,
            include_deleted: self.deleted.unwrap_or(false),
            order_key,
            order_dir,
        }
    }
}
