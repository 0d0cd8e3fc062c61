//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::stack::{StackType, Stacks};
// 共通ヘルパーを使うためにインポート
use super::common::{get_top_card, CardColor};
use log::trace;

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
///
/// # 引数
/// * `stacks`: 現在の全カード置き場への参照。状態の読み取りに使うよ！
/// * `card_to_move`: 移動させようとしているカード。複数枚の連なりを動かす時は、その先頭のカード。
/// * `target_tableau_index`: 移動先の場札 (Tableau) のインデックス (0-6)。どの列かを示すよ！
///
/// # 戻り値
/// * 移動可能なら `true`、そうでなければ `false`。
pub fn can_move_to_tableau(
    stacks: &Stacks,
    card_to_move: &Card,
    target_tableau_index: u8,
) -> bool {
    if target_tableau_index >= 7 {
        return false;
    }

    match get_top_card(stacks, StackType::Tableau(target_tableau_index)) {
        // --- 移動先の場札にカードがある場合 ---
        Some(target_top_card) => {
            // **ルール1: 色が交互になっているか？** ❤️🖤
            // 移動元カードの色と移動先カードの色が違う必要があるよ。
            let move_color = CardColor::from_suit(card_to_move.suit);
            let target_color = CardColor::from_suit(target_top_card.suit);
            let colors_different = move_color != target_color;

            // **ルール2: ランクが1つ小さいか？** 📉
            // 移動元カードのランクが、移動先カードのランクよりちょうど1つ小さい必要があるよ。
            // (例: 移動先が Q なら、移動元は J である必要がある)
            // Ace (=1) が移動先の時に 0 を探して underflow しないよう saturating_sub で！
            let rank_is_one_less =
                (card_to_move.rank as usize) == (target_top_card.rank as usize).saturating_sub(1);

            trace!(
                "[Tableau Rule] {:?} onto {:?}: colors_different={}, rank_is_one_less={}",
                card_to_move.rank, target_top_card.rank, colors_different, rank_is_one_less
            );

            colors_different && rank_is_one_less
        }
        // --- 移動先の場札が空の場合 ---
        None => {
            // 場札の列が空の場合、置けるのはキング (K) だけ！🤴
            card_to_move.rank == Rank::King
        }
    }
}
