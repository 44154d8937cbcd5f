//! Typed predicates handed to [`Repository::get_all_by_items`].
//!
//! Each function builds one condition over one entity; a slice of them is
//! combined with `AND`.
//!
//! [`Repository::get_all_by_items`]: crate::repository::Repository::get_all_by_items

pub mod section {
    use sea_orm::{sea_query::SimpleExpr, ColumnTrait};
    use downtrack_entity::section::Column;

    pub fn by_name(name: &str) -> SimpleExpr {
        Column::Name.eq(name)
    }

    pub fn by_manager_id(manager_id: i32) -> SimpleExpr {
        Column::SectionManagerId.eq(manager_id)
    }

    pub fn excluding_id(id: i32) -> SimpleExpr {
        Column::Id.ne(id)
    }
}

pub mod department {
    use sea_orm::{sea_query::SimpleExpr, ColumnTrait};
    use downtrack_entity::department::Column;

    pub fn by_id(id: i32) -> SimpleExpr {
        Column::Id.eq(id)
    }

    pub fn by_name(name: &str) -> SimpleExpr {
        Column::Name.eq(name)
    }

    pub fn by_section_id(section_id: i32) -> SimpleExpr {
        Column::SectionId.eq(section_id)
    }

    pub fn excluding_id(id: i32) -> SimpleExpr {
        Column::Id.ne(id)
    }
}

pub mod employee {
    use sea_orm::{sea_query::SimpleExpr, ColumnTrait};
    use downtrack_entity::{employee::Column, sea_orm_active_enums::UserRole};

    pub fn by_user_name(user_name: &str) -> SimpleExpr {
        Column::UserName.eq(user_name)
    }

    pub fn by_role(role: UserRole) -> SimpleExpr {
        Column::UserRole.eq(role)
    }

    pub fn by_department_id(department_id: i32) -> SimpleExpr {
        Column::DepartmentId.eq(department_id)
    }

    pub fn by_section_id(section_id: i32) -> SimpleExpr {
        Column::SectionId.eq(section_id)
    }

    pub fn excluding_id(id: i32) -> SimpleExpr {
        Column::Id.ne(id)
    }
}

pub mod equipment {
    use chrono::NaiveDate;
    use sea_orm::{
        sea_query::{Expr, Func, Query, SimpleExpr},
        ColumnTrait,
    };
    use downtrack_entity::{
        done_maintenance, equipment::Column, sea_orm_active_enums::EquipmentStatus,
        sea_orm_active_enums::TransferStatus, section, transfer_request,
    };

    pub fn by_department_id(department_id: i32) -> SimpleExpr {
        Column::DepartmentId.eq(department_id)
    }

    pub fn by_section_id(section_id: i32) -> SimpleExpr {
        Column::SectionId.eq(section_id)
    }

    pub fn by_status(status: EquipmentStatus) -> SimpleExpr {
        Column::Status.eq(status)
    }

    /// Substring match on the equipment name, compared with SQL `LIKE`
    pub fn name_contains(fragment: &str) -> SimpleExpr {
        Column::Name.contains(fragment)
    }

    /// Equipment located in any section managed by `manager_id`
    pub fn managed_by(manager_id: i32) -> SimpleExpr {
        Column::SectionId.in_subquery(
            Query::select()
                .column(section::Column::Id)
                .from(section::Entity)
                .and_where(section::Column::SectionManagerId.eq(manager_id))
                .to_owned(),
        )
    }

    /// Equipment with more than `times` maintenance records dated on or after `since`
    pub fn maintained_more_than(times: u64, since: NaiveDate) -> SimpleExpr {
        let maintenance_count = Func::count(Expr::col((
            done_maintenance::Entity,
            done_maintenance::Column::Id,
        )));
        Column::Id.in_subquery(
            Query::select()
                .column(done_maintenance::Column::EquipmentId)
                .from(done_maintenance::Entity)
                .and_where(done_maintenance::Column::Date.gte(since))
                .and_where(done_maintenance::Column::EquipmentId.is_not_null())
                .group_by_col(done_maintenance::Column::EquipmentId)
                .and_having(Expr::expr(maintenance_count).gt(times))
                .to_owned(),
        )
    }

    /// Equipment that left `department_id` through a registered transfer
    pub fn transferred_from(department_id: i32) -> SimpleExpr {
        Column::Id.in_subquery(
            Query::select()
                .column(transfer_request::Column::EquipmentId)
                .from(transfer_request::Entity)
                .and_where(transfer_request::Column::SourceDepartmentId.eq(department_id))
                .and_where(transfer_request::Column::Status.eq(TransferStatus::Registered))
                .to_owned(),
        )
    }
}

pub mod done_maintenance {
    use sea_orm::{sea_query::SimpleExpr, ColumnTrait};
    use downtrack_entity::done_maintenance::Column;

    pub fn by_technician_id(technician_id: i32) -> SimpleExpr {
        Column::TechnicianId.eq(technician_id)
    }

    pub fn by_equipment_id(equipment_id: i32) -> SimpleExpr {
        Column::EquipmentId.eq(equipment_id)
    }
}

pub mod evaluation {
    use sea_orm::{sea_query::SimpleExpr, ColumnTrait};
    use downtrack_entity::evaluation::Column;

    pub fn by_technician_id(technician_id: i32) -> SimpleExpr {
        Column::TechnicianId.eq(technician_id)
    }

    pub fn by_section_manager_id(section_manager_id: i32) -> SimpleExpr {
        Column::SectionManagerId.eq(section_manager_id)
    }
}

pub mod transfer_request {
    use sea_orm::{sea_query::SimpleExpr, ColumnTrait};
    use downtrack_entity::{sea_orm_active_enums::TransferStatus, transfer_request::Column};

    pub fn by_id(id: i32) -> SimpleExpr {
        Column::Id.eq(id)
    }

    pub fn by_status(status: TransferStatus) -> SimpleExpr {
        Column::Status.eq(status)
    }

    pub fn by_arrival_department_id(department_id: i32) -> SimpleExpr {
        Column::ArrivalDepartmentId.eq(department_id)
    }

    pub fn by_source_department_id(department_id: i32) -> SimpleExpr {
        Column::SourceDepartmentId.eq(department_id)
    }

    pub fn by_equipment_id(equipment_id: i32) -> SimpleExpr {
        Column::EquipmentId.eq(equipment_id)
    }
}

pub mod transfer {
    use sea_orm::{sea_query::SimpleExpr, ColumnTrait};
    use downtrack_entity::transfer::Column;

    pub fn by_request_id(request_id: i32) -> SimpleExpr {
        Column::RequestId.eq(request_id)
    }

    pub fn by_shipping_supervisor_id(employee_id: i32) -> SimpleExpr {
        Column::ShippingSupervisorId.eq(employee_id)
    }

    pub fn by_equipment_receptor_id(employee_id: i32) -> SimpleExpr {
        Column::EquipmentReceptorId.eq(employee_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use downtrack_entity::{
        prelude::{Employee, Equipment},
        sea_orm_active_enums::UserRole,
    };
    use pretty_assertions::assert_eq;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn conditions_are_conjoined() {
        let sql = Equipment::find()
            .filter(equipment::by_section_id(2))
            .filter(equipment::name_contains("Lathe"))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.ends_with(
            r#"WHERE "equipment"."section_id" = 2 AND "equipment"."name" LIKE '%Lathe%'"#
        ));
    }

    #[test]
    fn frequent_maintenance_groups_by_equipment() {
        let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let sql = Equipment::find()
            .filter(equipment::maintained_more_than(3, since))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r#"GROUP BY "equipment_id""#));
        assert!(sql.contains(r#"HAVING COUNT("done_maintenance"."id") > 3"#));
        assert!(sql.contains(r#""done_maintenance"."date" >= '2024-01-01'"#));
    }

    #[test]
    fn role_filter_compares_the_stored_tag() {
        let sql = Employee::find()
            .filter(employee::by_role(UserRole::Technician))
            .build(DbBackend::Sqlite)
            .to_string();
        assert_eq!(
            sql.rsplit("WHERE ").next(),
            Some(r#""employee"."user_role" = 'Technician'"#)
        );
    }
}
