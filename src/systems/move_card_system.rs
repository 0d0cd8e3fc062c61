// src/systems/move_card_system.rs

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use log::{debug, warn};

/// 移動を実行した結果だよ。何枚動いて、新しくカードがめくれたかを伝える。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    /// 実際に移動したカードの枚数 (連なりごと動かすと 2 以上になる)。
    pub cards_moved: usize,
    /// 移動元の場札で、新しく表向きになったカードがあったかどうか。
    pub revealed: bool,
}

/// 検証済みのカード移動を実行するよ！🖱️💨
///
/// **ここに来る移動は、すでに `logic::rules::is_move_valid` を通過してる前提！**
/// ルールチェックと実行を分けておくことで、「検証したのに違う移動を実行しちゃう」
/// 事故を防ぎつつ、それぞれを単体でテストできるんだ。
///
/// やることは3つ：
/// 1. 移動元の `source_index` から上を全部切り出して、順番そのままで移動先に積む。
///    (捨て札・組札からは一番上の1枚だけが来るから、切り出しは常に1枚分)
/// 2. 移動カウンターを1増やす。何枚まとめて動いても1回は1回！
/// 3. 移動元が場札なら、新しく一番上になったカードが裏向きのとき表にめくる。
///    めくれるのは必ず1枚だけ。列が空になったら何もめくれないよ。
pub fn apply_move(
    state: &mut GameState,
    from: StackType,
    source_index: usize,
    target: StackType,
) -> MoveApplied {
    // --- 1. 移動元から切り出す ---
    let moving_cards = match state.stacks.cards_mut(from) {
        Some(cards) if source_index < cards.len() => cards.split_off(source_index),
        _ => {
            // 検証済みの移動でここに来ることはないはず。来たら何もせず帰る。
            warn!("MoveCardSystem: invalid source {:?}[{}], nothing moved", from, source_index);
            return MoveApplied { cards_moved: 0, revealed: false };
        }
    };
    let cards_moved = moving_cards.len();
    debug!("MoveCardSystem: moving {} card(s) {:?} -> {:?}", cards_moved, from, target);

    // --- 2. 移動先に積む (元の並び順のまま！) ---
    if let Some(cards) = state.stacks.cards_mut(target) {
        cards.extend(moving_cards);
    }

    // --- 3. 移動カウンター ---
    state.move_count += 1;

    // --- 4. 場札の reveal ルール ---
    let revealed = match from {
        StackType::Tableau(col) => flip_top_card(state, col),
        _ => false,
    };

    MoveApplied { cards_moved, revealed }
}

/// 場札の一番上のカードが裏向きなら表にめくるよ。めくったら true。
///
/// 列が空だったり、一番上がもう表向きだったりしたら何もしない。
/// 1回の移動でめくれるのは絶対に1枚だけ、というのがこの関数の形で保証される！
pub fn flip_top_card(state: &mut GameState, tableau_index: u8) -> bool {
    let Some(column) = state.stacks.cards_mut(StackType::Tableau(tableau_index)) else {
        return false;
    };
    match column.last_mut() {
        Some(top_card) if !top_card.is_face_up => {
            top_card.is_face_up = true;
            debug!("MoveCardSystem: revealed {:?} on tableau {}", top_card.rank, tableau_index);
            true
        }
        _ => false,
    }
}
