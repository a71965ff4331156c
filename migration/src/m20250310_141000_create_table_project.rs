/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Project::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Project::Title).string().not_null())
                    .col(ColumnDef::new(Project::AbstractText).text().not_null())
                    .col(ColumnDef::new(Project::Technology).string().not_null())
                    .col(ColumnDef::new(Project::TeamMembers).string().not_null())
                    .col(ColumnDef::new(Project::Document).string().not_null())
                    .col(ColumnDef::new(Project::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Project::Student).json_binary().not_null())
                    .col(ColumnDef::new(Project::Status).integer().not_null())
                    .col(ColumnDef::new(Project::FacultyReview).json_binary())
                    .col(ColumnDef::new(Project::AdminReview).json_binary())
                    .col(ColumnDef::new(Project::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project-student_id")
                            .from(Project::Table, Project::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-project-student_id")
                    .table(Project::Table)
                    .col(Project::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Title,
    AbstractText,
    Technology,
    TeamMembers,
    Document,
    StudentId,
    Student,
    Status,
    FacultyReview,
    AdminReview,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
