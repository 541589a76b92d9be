//! Bridge operations, one module per entity kind.
//!
//! | Operation | Pagination | Lookup by identifier |
//! |-----------|------------|----------------------|
//! | categories | in memory, 20 per page | lenient |
//! | content pages | remote | strict |
//! | products | remote | lenient |

mod categories;
mod content_pages;
mod products;
