// src/logic/mod.rs
//! 状態を変更しない純粋なゲームロジック (デッキ生成とルール判定) を置くよ。

pub mod deck;
pub mod rules;
