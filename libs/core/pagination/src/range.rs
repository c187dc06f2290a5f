use sea_orm::{EntityTrait, QuerySelect, Select};

/// Offset/limit applied to a query source before it is materialized.
///
/// `page_index` is **0-based**: `page_range(2, 20)` skips 40 rows and takes 20.
/// A `page_size` of `0` disables paging and hands the source back untouched.
/// Offsets and limits bound to SQL are capped at `i64::MAX`.
pub trait PageRange: Sized {
    fn page_range(self, page_index: u64, page_size: u64) -> Self;
}

impl<E> PageRange for Select<E>
where
    E: EntityTrait,
{
    fn page_range(self, page_index: u64, page_size: u64) -> Self {
        if page_size == 0 {
            return self;
        }

        const BIND_MAX: u64 = i64::MAX as u64;

        self.offset(page_index.saturating_mul(page_size).min(BIND_MAX))
            .limit(page_size.min(BIND_MAX))
    }
}

impl<T> PageRange for Vec<T> {
    fn page_range(self, page_index: u64, page_size: u64) -> Self {
        if page_size == 0 {
            return self;
        }

        let skip = usize::try_from(page_index.saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);

        self.into_iter().skip(skip).take(take).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    mod pet {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "pets")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub name: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn sql(select: Select<pet::Entity>) -> String {
        select.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn test_select_gets_offset_and_limit() {
        let paged = sql(pet::Entity::find().page_range(2, 20));

        assert!(paged.contains("LIMIT 20"), "{paged}");
        assert!(paged.contains("OFFSET 40"), "{paged}");
    }

    #[test]
    fn test_first_index_starts_at_zero() {
        let paged = sql(pet::Entity::find().page_range(0, 15));

        assert!(paged.contains("LIMIT 15"), "{paged}");
        assert!(paged.contains("OFFSET 0"), "{paged}");
    }

    #[test]
    fn test_zero_page_size_leaves_select_unchanged() {
        let plain = sql(pet::Entity::find());
        let paged = sql(pet::Entity::find().page_range(3, 0));

        assert_eq!(plain, paged);
        assert!(!paged.contains("LIMIT"));
    }

    #[test]
    fn test_select_offset_never_exceeds_i64() {
        let paged = sql(pet::Entity::find().page_range(u64::MAX / 2, 100));

        assert!(paged.contains(&format!("OFFSET {}", i64::MAX)), "{paged}");
    }

    #[test]
    fn test_vec_is_zero_based() {
        let source: Vec<u32> = (0..50).collect();
        let paged = source.page_range(1, 20);

        assert_eq!(paged, (20..40).collect::<Vec<_>>());
    }

    #[test]
    fn test_vec_zero_page_size_is_identity() {
        let source: Vec<u32> = (0..7).collect();
        assert_eq!(source.clone().page_range(4, 0), source);
    }

    #[test]
    fn test_vec_index_past_the_end_is_empty() {
        let source: Vec<u32> = (0..7).collect();
        assert!(source.page_range(5, 3).is_empty());
    }
}
