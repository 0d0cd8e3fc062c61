// src/systems/deal_system.rs

// === 使うものを宣言するよ！ ===
// GameState: ゲーム全体の状態。配り直す時にまるごとリセットするよ。
// logic::deck: デッキ生成とシャッフル (create_standard_deck / shuffle_deck)。🎲
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use log::info;

/// ゲームの初期カード配置を実行する関数だよ！ 🎉
///
/// # 引数
/// - `state`: 可変参照 (&mut GameState)。置き場の中身を全部作り直すから `&mut` が付いてるよ。
///
/// # 処理の流れ
/// 1. 新しいカードデッキ (52枚、全部裏向き) を作ってシャッフルする。
/// 2. 前のゲームのカードが残ってたら困るから、置き場を空にする (念のためのお掃除🧹)。
/// 3. シャッフルされたデッキからカードを取り出して、クロンダイクのルールに従って配置していく。
///    - 場札 (Tableau): 7列。1列目は1枚(表向き)、2列目は2枚(一番上だけ表向き)、... 7列目は7枚(一番上だけ表向き)。
///    - 山札 (Stock): 残り24枚、全部裏向き、デッキの並びのまま。
/// 4. 配り終わったら状態を Playing に進める。
pub fn deal(state: &mut GameState) {
    // --- 1. デッキの準備 ---
    let mut deck_cards = create_standard_deck();
    shuffle_deck(&mut deck_cards);
    info!("🃏 デッキ作成完了！ ({}枚)", deck_cards.len());

    // --- 2. 置き場のリセット ---
    state.stacks = crate::components::stack::Stacks::new();

    // --- 3a. 場札 (Tableau) への配置 ---
    // `deck_cards.into_iter()` でデッキのカードを1枚ずつ取り出せるようにするよ。
    // `into_iter()` は元の `deck_cards` の所有権を奪うから、もう `deck_cards` は使えなくなる。注意！⚠️
    let mut card_iterator = deck_cards.into_iter();

    for tableau_index in 0..7u8 {
        // 各列に配置するカード枚数は (列番号 + 1) 枚。
        for card_in_tableau in 0..=tableau_index {
            // デッキからカードを1枚取り出す。
            // 7列分で28枚しか使わないから、52枚のデッキが尽きることはないよ。
            let Some(mut card) = card_iterator.next() else { return };

            // その列の一番上のカードだけ表向きにするよ！👀
            if card_in_tableau == tableau_index {
                card.is_face_up = true;
            }

            state.stacks.push_card(StackType::Tableau(tableau_index), card);
        }
    }
    info!("✅ 場札への配置完了！");

    // --- 3b. 山札 (Stock) への配置 ---
    // 残りのカードを全部、山札に裏向きのまま置くよ。
    for card in card_iterator {
        state.stacks.push_card(StackType::Stock, card);
    }
    info!("✅ 山札への配置完了！ ({}枚)", state.stacks.len(StackType::Stock));

    // --- 4. 配り終わり。プレイ開始！ ---
    state.status = GameStatus::Playing;
}

// --- テストコード ---
// `#[cfg(test)]` アトリビュートは、`cargo test` コマンドを実行した時だけコンパイルされるコードブロックを示すよ。
#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_initial_deal() {
        // --- 準備 & 実行 ---
        let mut state = GameState::new();
        deal(&mut state);

        // --- 検証 ---
        // 1. 配置されたカードの枚数を確認！ 合計52枚のはず！
        assert_eq!(state.stacks.all_cards().count(), 52, "配置されたカードの総数が52枚ではありません！");

        // 2. 山札 (Stock) の枚数チェック (52 - (1+2+3+4+5+6+7)) = 52 - 28 = 24 枚
        assert_eq!(state.stacks.stock.len(), 24, "山札のカード枚数が24枚ではありません！");
        // 山札のカードは全部裏向きのはず！
        assert!(state.stacks.stock.iter().all(|c| !c.is_face_up), "山札に表向きのカードがあります！");

        // 3. 場札 (Tableau) の枚数チェック
        for (i, column) in state.stacks.tableau.iter().enumerate() {
            assert_eq!(column.len(), i + 1, "場札[{}]の枚数が{}枚ではありません！", i, i + 1);
            // 一番上のカードだけが表向きのはず！
            for (j, card) in column.iter().enumerate() {
                if j == i {
                    assert!(card.is_face_up, "場札[{}]の一番上が裏向きです！{:?}", i, card);
                } else {
                    assert!(!card.is_face_up, "場札[{}]の{}番目が表向きです！{:?}", i, j, card);
                }
            }
        }

        // 4. Foundation と Waste にはカードがないはず
        assert!(state.stacks.waste.is_empty(), "Waste にカードが配置されています！");
        assert!(state.stacks.foundations.iter().all(|f| f.is_empty()), "Foundation にカードが配置されています！");

        // 5. カードの重複がないかチェック (念のため)
        let unique_count = state.stacks.all_cards().map(|c| (c.suit, c.rank)).unique().count();
        assert_eq!(unique_count, 52, "配置されたカードに重複が見つかりました！");

        // 6. 配り終わったらプレイ中になってるはず
        assert_eq!(state.status, GameStatus::Playing);

        println!("✅✅✅ test_initial_deal 成功！ 🎉🎉🎉");
    }

    #[test]
    fn test_deal_resets_previous_game() {
        let mut state = GameState::new();
        deal(&mut state);

        // 1ゲーム目の状態を適当にいじる
        let card = state.stacks.pop_card(StackType::Stock).unwrap();
        state.stacks.push_card(StackType::Waste, card);

        // 配り直し
        deal(&mut state);
        assert_eq!(state.stacks.all_cards().count(), 52, "配り直し後も52枚のはず");
        assert!(state.stacks.waste.is_empty(), "配り直したら捨て札は空のはず");
        assert_eq!(state.stacks.stock.len(), 24, "配り直したら山札は24枚のはず");
    }
}
