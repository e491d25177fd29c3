use crate::server::{
    data::board::BoardRepository,
    model::board::{CreateBoardParams, UpdateBoardParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod search;
