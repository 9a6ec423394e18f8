pub mod analysis_card;
pub mod comparison_card;
pub mod history_list;
pub mod info_modal;
pub mod metric;
pub mod region;
pub mod tab_bar;
