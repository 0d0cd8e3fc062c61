//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};
use crate::components::stack::{StackType, Stacks};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札 (Tableau) への移動ルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red, // ハートとダイヤは赤！♦️❤️
            Suit::Club | Suit::Spade => CardColor::Black,  // クラブとスペードは黒！♣️♠️
        }
    }
}

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
/// 引数のインデックスが無効 (0-3以外) の場合は None を返すよ。
/// `pub(crate)` なので、`logic::rules` モジュールとそのサブモジュール内からのみ呼び出せる。
pub(crate) fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    match foundation_index {
        0 => Some(Suit::Heart),
        1 => Some(Suit::Diamond),
        2 => Some(Suit::Club),
        3 => Some(Suit::Spade),
        _ => None,
    }
}

/// 指定されたスタックの一番上のカードを取得するヘルパー関数。
/// 「一番上 = Vec の末尾」の約束に乗っかるだけ！
pub(crate) fn get_top_card(stacks: &Stacks, target_stack: StackType) -> Option<&Card> {
    stacks.top_card(target_stack)
}
