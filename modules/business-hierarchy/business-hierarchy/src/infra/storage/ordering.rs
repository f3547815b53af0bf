//! Listing order shared by the repositories.

use business_hierarchy_sdk::SortOrder;
use sea_orm::{EntityTrait, Order, QueryOrder, Select};

/// Order by the display column, then by id so equal names page stably.
#[must_use]
pub fn by_name<E: EntityTrait>(
    query: Select<E>,
    name: E::Column,
    id: E::Column,
    order: SortOrder,
) -> Select<E> {
    let direction = match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };
    query.order_by(name, direction.clone()).order_by(id, direction)
}
