use crate::paging::{PagedRequest, PagedResult};
use sea_orm::{
    sea_query::SimpleExpr,
    ActiveModelBehavior, ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder, Select, Value,
};
use std::marker::PhantomData;
use tracing::instrument;

type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Uniform data access over one entity type.
///
/// A repository borrows the transaction of the [`UnitOfWork`] that handed
/// it out, so every write is staged until that unit of work completes.
///
/// [`UnitOfWork`]: crate::unit_of_work::UnitOfWork
#[derive(Debug)]
pub struct Repository<'a, E> {
    txn: &'a DatabaseTransaction,
    entity: PhantomData<E>,
}

impl<'a, E> Repository<'a, E> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self {
            txn,
            entity: PhantomData,
        }
    }
}

impl<'a, E> Repository<'a, E>
where
    E: EntityTrait,
    E::Model: Sync,
{
    /// Insert a new row and return it as stored
    pub async fn create<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.txn).await
    }

    /// Write every `Set` column of `model`; the primary key must be present
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        model.update(self.txn).await
    }

    /// Returns the number of rows deleted, zero when `id` was absent
    pub async fn delete_by_id(&self, id: PrimaryKeyOf<E>) -> Result<u64, DbErr> {
        let res = E::delete_by_id(id).exec(self.txn).await?;
        Ok(res.rows_affected)
    }

    pub async fn get_by_id(&self, id: PrimaryKeyOf<E>) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.txn).await
    }

    /// A lazy query over every row; nothing runs until it is executed
    pub fn get_all(&self) -> Select<E> {
        E::find()
    }

    /// A lazy query over the rows matching all of `filters`
    pub fn get_all_by_items<I>(&self, filters: I) -> Select<E>
    where
        I: IntoIterator<Item = SimpleExpr>,
    {
        filters
            .into_iter()
            .fold(self.get_all(), |select, filter| select.filter(filter))
    }

    /// Execute `select` in this repository's transaction
    pub async fn fetch(&self, select: Select<E>) -> Result<Vec<E::Model>, DbErr> {
        select.all(self.txn).await
    }

    pub async fn find_one<I>(&self, filters: I) -> Result<Option<E::Model>, DbErr>
    where
        I: IntoIterator<Item = SimpleExpr>,
    {
        self.get_all_by_items(filters).one(self.txn).await
    }

    pub async fn count<I>(&self, filters: I) -> Result<u64, DbErr>
    where
        I: IntoIterator<Item = SimpleExpr>,
    {
        self.get_all_by_items(filters).count(self.txn).await
    }

    pub async fn exists<I>(&self, filters: I) -> Result<bool, DbErr>
    where
        I: IntoIterator<Item = SimpleExpr>,
    {
        Ok(self.count(filters).await? > 0)
    }

    /// Assign `value` to `column` on every row matching `filters`.
    /// Returns the number of rows touched.
    pub async fn update_column_where<V, I>(
        &self,
        column: E::Column,
        value: V,
        filters: I,
    ) -> Result<u64, DbErr>
    where
        V: Into<Value>,
        I: IntoIterator<Item = SimpleExpr>,
    {
        let res = filters
            .into_iter()
            .fold(
                E::update_many().col_expr(column, SimpleExpr::Value(value.into())),
                |update, filter| update.filter(filter),
            )
            .exec(self.txn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_where<I>(&self, filters: I) -> Result<u64, DbErr>
    where
        I: IntoIterator<Item = SimpleExpr>,
    {
        let res = filters
            .into_iter()
            .fold(E::delete_many(), |delete, filter| delete.filter(filter))
            .exec(self.txn)
            .await?;
        Ok(res.rows_affected)
    }

    /// Fetch one page of `select`, ordered by primary key.
    ///
    /// The request is expected to be validated; a zero page number is
    /// treated as the first page. A page beyond the last one is empty.
    #[instrument(level = "trace", skip(self, select))]
    pub async fn get_paged(
        &self,
        select: Select<E>,
        request: &PagedRequest,
    ) -> Result<PagedResult<E::Model>, DbErr> {
        let select = E::PrimaryKey::iter()
            .fold(select, |select, key| select.order_by_asc(key.into_column()));
        let page_size = request.page_size.max(1);
        let page = request.page_number.saturating_sub(1);
        let paginator = select.paginate(self.txn, page_size);
        let total_count = paginator.num_items().await?;
        // Pages past the end are answered without a query; their offset may not fit in a u64
        let items = match page.checked_mul(page_size) {
            Some(offset) if offset < total_count => paginator.fetch_page(page).await?,
            _ => Vec::new(),
        };
        Ok(PagedResult::new(items, total_count, request))
    }
}
