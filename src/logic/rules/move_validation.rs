// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//!
//! 「どこから動かしていいか (origin ルール)」と「どこに置けるか (target ルール)」を
//! ここでまとめて判定するよ。判定だけ！状態は絶対に変更しない。

use crate::components::card::{Rank, Suit};
use crate::components::stack::{StackType, Stacks};
use crate::logic::rules::{foundation, tableau}; // 各ルール関数を use
use log::debug;

/// 移動元の置き場から、スートとランクでカードの位置 (インデックス) を探すよ。
///
/// プレゼンテーション層は「どのカードを掴んだか」をスートとランクで教えてくるから、
/// それを Vec の中の位置に変換するのがこの関数の仕事。
/// カードは52枚全部ユニークだから、見つかれば位置は一意に決まる！
pub fn find_card_index(
    stacks: &Stacks,
    from: StackType,
    suit: Suit,
    rank: Rank,
) -> Option<usize> {
    stacks
        .cards(from)?
        .iter()
        .position(|card| card.suit == suit && card.rank == rank)
}

/// 指定された位置のカードを特定のスタックに移動できるか検証する。
///
/// # 移動元 (origin) のルール
/// - 山札 (Stock) からは直接動かせない。めくる操作は別ルート！
/// - 捨て札 (Waste) と組札 (Foundation) からは、一番上の1枚だけ。
/// - 場札 (Tableau) からは、表向きのカードならどれでも掴める。
///   掴んだカードより上に積まれてる分は、まとめて一緒に動く (face-up run)。
///   ただし組札に置く時だけは1枚ずつ、つまり列の一番上のカード限定だよ。
///
/// # 移動先 (target) のルール
/// - 場札・組札それぞれの判定関数に委譲する。
/// - 山札・捨て札にカードを「置く」移動は常に不正。
///
/// 掴んだ連なりの内側の並びは、ここでは再チェックしない。
/// 表向きの連なりは積まれた時点でルール通りにしか作れないから、信用して良いんだ。
pub fn is_move_valid(
    stacks: &Stacks,
    from: StackType,
    source_index: usize,
    target_stack: StackType,
) -> bool {
    // 移動元のカードを取得。位置が不正なら問答無用で false！
    let card_to_move = match stacks.cards(from).and_then(|cards| cards.get(source_index)) {
        Some(card) => card,
        None => {
            debug!("[Rules Validation] No card at {:?}[{}]", from, source_index);
            return false;
        }
    };

    // --- origin ルールのチェック ---
    let source_len = stacks.len(from);
    let origin_ok = match from {
        // 山札からの直接移動は不可。
        StackType::Stock => false,
        // 捨て札・組札は一番上の1枚だけ。
        StackType::Waste | StackType::Foundation(_) => source_index == source_len - 1,
        // 場札は表向きのカードなら連なりごと OK。
        // ただし組札行きは単騎限定 (連なりは組札に積めない)。
        StackType::Tableau(_) => {
            let single_card_only = matches!(target_stack, StackType::Foundation(_));
            card_to_move.is_face_up && (!single_card_only || source_index == source_len - 1)
        }
    };
    if !origin_ok {
        debug!("[Rules Validation] Origin rule rejected: {:?}[{}] -> {:?}", from, source_index, target_stack);
        return false;
    }

    // --- target ルールのチェック ---
    // 移動先スタックの種類に応じてルールチェック
    match target_stack {
        StackType::Tableau(target_index) => {
            // 場札への移動ルールをチェック
            tableau::can_move_to_tableau(stacks, card_to_move, target_index)
        }
        StackType::Foundation(target_index) => {
            // 組札への移動ルールをチェック
            foundation::can_move_to_foundation(stacks, card_to_move, target_index)
        }
        StackType::Stock | StackType::Waste => {
            // Stock, Waste への直接移動は許可されない
            debug!("[Rules Validation] Moving to {:?} is not allowed.", target_stack);
            false
        }
    }
}
