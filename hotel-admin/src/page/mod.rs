//! 房间管理页面
//!
//! - [`RoomPageController`] - 房间列表派生视图与操作流程
//! - [`PageState`] - 页面瞬态状态
//! - [`RoomSummary`] - 房间卡片展示模型

mod controller;
mod master_data;
mod state;
mod summary;

pub use controller::{RoomPageController, StatusAction};
pub use state::{
    Alert, AlertLevel, MasterDataForm, Modal, PageState, RoomForm, Section,
};
pub use summary::RoomSummary;
