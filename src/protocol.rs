// src/protocol.rs

// このファイルは、エンジン本体とプレゼンテーション層 (描画やドラッグ操作を担当する側) の
// 間でやり取りするデータの形式を定義するよ！💌
// データ構造 (struct や enum) を定義して、それをJSON形式に変換したり、
// JSON形式から元に戻したりするために、`serde`クレートを使うよ。
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Serialize, Deserialize};

// ゲーム内の型もメッセージで使うからインポートしておくね！
use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::{GameState, GameStatus};
// ★ StackType はここから pub use する！★
pub use crate::components::stack::StackType;

// --- プレゼンテーション層からエンジンへ (入力) ---

/// プレイヤーがカードを移動させようとした時の「移動したい！」という意思表示だよ。
///
/// ドラッグ&ドロップの解決はプレゼンテーション層の仕事。エンジンに届く時には
/// 「どのカードを、どこから、どこへ」まで解決済みになってる。
/// カードは52枚全部ユニークだから、スートとランクだけで一意に特定できるんだ！
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    /// 掴んだカードのスート。
    pub suit: Suit,
    /// 掴んだカードのランク。
    pub rank: Rank,
    /// どの置き場から掴んだか。
    pub from: StackType,
    /// どの置き場に置こうとしているか。
    pub to: StackType,
}

// --- エンジンからプレゼンテーション層へ (出力) ---

/// スナップショットに入れるカード1枚分のデータだよ。
///
/// 裏向きのカードも suit/rank 入りでそのまま入れてる。めくる演出のために
/// プレゼンテーション層が全情報を持っていても、ルール上は困らないからね。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self { suit: card.suit, rank: card.rank, is_face_up: card.is_face_up }
    }
}

/// ゲームの現在の状態をまるごと写し取ったスナップショットだよ。📸
///
/// 状態が変わる操作のたびにこれを作って渡せば、プレゼンテーション層は
/// これだけを見て画面を再描画できる。エンジンの内部状態には触らせない！
/// どの Vec も「先頭が一番下、末尾が一番上」の順番だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub stock: Vec<CardData>,
    pub waste: Vec<CardData>,
    pub foundations: [Vec<CardData>; 4],
    pub tableau: [Vec<CardData>; 7],
    pub status: GameStatus,
    pub move_count: u32,
    pub elapsed_seconds: u64,
}

impl GameSnapshot {
    /// GameState と経過秒数からスナップショットを組み立てるよ。
    pub fn capture(state: &GameState, elapsed_seconds: u64) -> Self {
        let to_data = |cards: &Vec<Card>| cards.iter().map(CardData::from).collect::<Vec<_>>();
        Self {
            stock: to_data(&state.stacks.stock),
            waste: to_data(&state.stacks.waste),
            foundations: [
                to_data(&state.stacks.foundations[0]),
                to_data(&state.stacks.foundations[1]),
                to_data(&state.stacks.foundations[2]),
                to_data(&state.stacks.foundations[3]),
            ],
            tableau: [
                to_data(&state.stacks.tableau[0]),
                to_data(&state.stacks.tableau[1]),
                to_data(&state.stacks.tableau[2]),
                to_data(&state.stacks.tableau[3]),
                to_data(&state.stacks.tableau[4]),
                to_data(&state.stacks.tableau[5]),
                to_data(&state.stacks.tableau[6]),
            ],
            status: state.status,
            move_count: state.move_count,
            elapsed_seconds,
        }
    }
}

/// ゲームに勝った時に一度だけ届くイベントだよ！🏆🎉
/// 「何手で、何秒でクリアしたか」をお祝いメッセージに使ってもらう想定。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWonEvent {
    pub move_count: u32,
    pub elapsed_seconds: u64,
}
