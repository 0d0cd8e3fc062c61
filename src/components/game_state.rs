// src/components/game_state.rs

// serde を使う宣言！ゲーム状態をスナップショットで外に渡す時に使うよ！
use serde::{Serialize, Deserialize};

use crate::components::stack::Stacks;

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// ゲームがまだプレイ中なのか、それとも勝って終わったのか、
/// みたいな状況を示すのに使うよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// カードを配っている最中。配り終わったら即 Playing に遷移するよ。
    Dealing,
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 ここが終着点。新しいゲームを始めるまで何も受け付けない。
    Won,
}

/// ゲームのすべての可変状態をひとつにまとめた構造体だよ。
///
/// グローバル変数をバラバラに持つんじゃなくて、この一個の値に全部入れる！
/// そうすることでテストしやすいし、ゲームを複数同時に動かすこともできるんだ。便利！💡
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// 全カード置き場 (山札・捨て札・組札・場札)。
    pub stacks: Stacks,
    /// いまのゲーム進行状態。
    pub status: GameStatus,
    /// 成立した操作の回数。カード移動・山札めくり・山札リセットで1ずつ増えるよ。
    pub move_count: u32,
}

impl GameState {
    /// 配り始める前の状態を作るよ。カードはまだどこにもない！
    pub fn new() -> Self {
        Self {
            stacks: Stacks::new(),
            status: GameStatus::Dealing,
            move_count: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*; // 上で定義した GameStatus, GameState を使う

    #[test]
    fn create_game_state() {
        let initial_state = GameState::new();

        assert_eq!(initial_state.status, GameStatus::Dealing);
        assert_eq!(initial_state.move_count, 0);
        assert_eq!(initial_state.stacks.all_cards().count(), 0, "配る前はカードが1枚もないはず");
        println!("初期ゲーム状態: {:?}", initial_state.status);
    }

    #[test]
    fn game_status_comparison() {
        let playing = GameStatus::Playing;
        let won = GameStatus::Won;

        assert_eq!(playing, GameStatus::Playing);
        assert_ne!(playing, won);
        assert_ne!(GameStatus::Dealing, playing);

        println!("GameStatus の比較テスト、成功！🎉");
    }
}
