use crate::repository::Repository;
use sea_orm::{DatabaseTransaction, DbErr, EntityTrait, TransactionTrait};
use tracing::instrument;

/// One transaction shared by every repository it hands out.
///
/// Nothing written through those repositories is visible to other
/// connections until [`UnitOfWork::complete`] succeeds. Dropping a unit of
/// work without completing it rolls the transaction back.
#[derive(Debug)]
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    #[instrument(level = "trace", skip(db))]
    pub async fn begin<C>(db: &C) -> Result<Self, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    pub fn repository<E>(&self) -> Repository<'_, E>
    where
        E: EntityTrait,
    {
        Repository::new(&self.txn)
    }

    /// Commit every pending change at once
    #[instrument(level = "trace", skip(self))]
    pub async fn complete(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    /// Discard every pending change
    #[instrument(level = "trace", skip(self))]
    pub async fn abort(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}
