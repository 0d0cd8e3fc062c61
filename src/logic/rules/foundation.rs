//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::stack::{StackType, Stacks};
// 共通ヘルパーを使うためにインポート
use super::common::{get_foundation_suit, get_top_card};
use log::debug;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// ここは純粋な判定だけ！状態は一切いじらないよ。
///
/// # 引数
/// * `stacks`: 現在の全カード置き場への参照。状態の読み取りに使うよ！
/// * `card_to_move`: 移動させようとしているカード。
/// * `target_foundation_index`: 移動先の組札 (Foundation) のインデックス (0-3)。どのスートの組札かを示すよ！
///
/// # 戻り値
/// * 移動可能なら `true`、そうでなければ `false`。
pub fn can_move_to_foundation(
    stacks: &Stacks,
    card_to_move: &Card,
    target_foundation_index: u8,
) -> bool {
    // --- 1. 移動先の組札 (Foundation) が受け入れるべきスートを取得 ---
    let target_suit = match get_foundation_suit(target_foundation_index) {
        Some(suit) => suit,
        None => {
            debug!("[Foundation Rule] Invalid foundation index: {}", target_foundation_index);
            return false;
        }
    };

    // --- 2. 移動元カードのスートが、移動先の組札のスートと一致するかチェック ---
    // Foundation ルールの基本！ スートが違ったら絶対に置けないよ。
    if card_to_move.suit != target_suit {
        return false;
    }

    // --- 3. ルール判定！ (ランクのチェック) ---
    // 移動先の組札の一番上のカードがあるかどうかで場合分けするよ。
    match get_top_card(stacks, StackType::Foundation(target_foundation_index)) {
        // --- 3a. 移動先の組札が空の場合 ---
        None => {
            // 組札が空の場合、置けるのはエース (A) だけ！👑
            // スートの一致はステップ2で既に確認済みだよ！👍
            card_to_move.rank == Rank::Ace
        }
        // --- 3b. 移動先の組札にカードがある場合 ---
        Some(target_top_card) => {
            // **ルール: ランクが連続しているか？** 📈
            // 移動元カードのランクが、移動先トップカードのランクよりちょうど1つ大きい必要があるよ。
            // (例: 移動先トップが A なら、移動元は 2 である必要がある)
            // Rank enum を usize に変換して比較する。
            (card_to_move.rank as usize) == (target_top_card.rank as usize) + 1
        }
    }
}
