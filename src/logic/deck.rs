// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use rand::{seq::SliceRandom, thread_rng};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 返り値は `Vec<Card>` で、カードはスートとランクの全組み合わせ。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
/// 並び順はスート順 × ランク順で毎回同じ。ランダムにしたければ `shuffle_deck` を呼んでね。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52); // 52枚入る容量を確保しておくと効率的！

    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank)); // 最初は裏向き
        }
    }
    deck // 完成したデッキを返す！
}

/// カードデッキをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は中身が Fisher–Yates だから、
/// 52! 通りの並びが全部同じ確率で出る、ちゃんと一様なシャッフル！🎲
///
/// # 引数
/// * `deck` - シャッフルしたいカードデッキ (`Vec<Card>`) への可変参照。
pub fn shuffle_deck(deck: &mut Vec<Card>) {
    let mut rng = thread_rng(); // 乱数生成器を取得
    deck.shuffle(&mut rng); // デッキをシャッフル！
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*; // 上で定義した関数を使う
    use itertools::Itertools;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！ (suit, rank) のペアが全部ユニークなら OK。
        let unique_count = deck.iter().map(|card| (card.suit, card.rank)).unique().count();
        assert_eq!(unique_count, 52, "デッキに重複したカードが見つかりました！");

        // 3. すべてのカードが裏向きかチェック！
        let all_face_down = deck.iter().all(|card| !card.is_face_up);
        assert!(all_face_down, "デッキに表向きのカードが含まれています！");

        println!("create_standard_deck 関数のテスト、成功！🎉");
    }

    #[test]
    fn test_shuffle_keeps_same_cards() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone(); // コピーしてシャッフルする
        shuffle_deck(&mut shuffled_deck);

        // サイズは変わらないはず
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");

        // 中身の集合も変わらないはず (順番を揃えてから比較)
        let sort_key = |card: &Card| (card.suit as usize, card.rank as usize);
        let mut a = initial_deck.clone();
        let mut b = shuffled_deck.clone();
        a.sort_by_key(sort_key);
        b.sort_by_key(sort_key);
        assert_eq!(a, b, "シャッフルでカードの中身が変わった！");

        // シャッフルしたら元の順番とは (ほぼ確実に) 変わるはず
        // ただし、ごく稀に同じ順番になる可能性もあるので、完全なテストではない
        assert_ne!(initial_deck, shuffled_deck, "シャッフルしても順番が変わってない (稀に起こりうる)");
    }
}
