// src/systems/mod.rs
//! ゲーム状態を実際に変更する処理 (配り・移動・山札・勝利判定) をまとめるよ！

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;
