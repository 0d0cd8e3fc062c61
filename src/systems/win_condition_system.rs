// src/systems/win_condition_system.rs

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules::check_win_condition;
use log::info;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 組札4つの合計が52枚になったら勝ち。組札への移動が成立するたびに呼ばれるよ。
///
/// エッジトリガー！Playing のときに条件を満たした「その1回」だけ true を返して
/// 状態を Won に進める。もう Won になってたら何もしないで false。
/// これで勝利イベントが二重に飛ぶことはないんだ。👍
pub fn run(state: &mut GameState) -> bool {
    if state.status != GameStatus::Playing {
        return false;
    }

    if check_win_condition(state.stacks.foundation_card_count()) {
        info!("WinConditionSystem: 勝利条件達成！🏆 ゲーム状態を更新します。");
        state.status = GameStatus::Won;
        true
    } else {
        false
    }
}
