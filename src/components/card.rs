// src/components/card.rs

// serde を使う宣言！カード情報をスナップショットで外に渡す時に使うよ！
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashSet で重複チェックとかに使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 全スートを順番に並べた配列。デッキ生成のループで使うよ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// スートと同じように #[derive(...)] を付けておくよ！
/// PartialOrd, Ord も追加して、ランクの大小比較 (`<`, `>`) もできるようにしておこう！
/// Ace = 1 から始めてるから、`rank as usize` でそのまま数値として扱えるんだ。
/// 組札の「次のランク」チェック (+1) や場札の「1つ小さい」チェック (-1) で大活躍！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

/// 全ランクを A から K まで順番に並べた配列。これもデッキ生成用！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す構造体だよ！🃏
///
/// 「ハート♥️のA、今は裏向き」みたいな情報を持つんだ。
///
/// - `suit`: カードのスート (作成後は変わらない)
/// - `rank`: カードのランク (作成後は変わらない)
/// - `is_face_up`: カードが表向きか裏向きかを示すフラグ (trueなら表向き、ここだけ変化する)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)] // Copy は外したよ。カードの状態は変わる可能性があるからね。
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool, // カードが表向きかどうか
}

impl Card {
    /// 裏向きの新しいカードを作るヘルパー関数。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }
}

// --- テスト ---
// 簡単なテストを書いておこう！
#[cfg(test)]
mod tests {
    use super::*; // 上で定義した Suit, Rank, Card を使う

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        // 値がちゃんと設定されてるか確認
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert_eq!(card.is_face_up, false); // 最初は裏向き

        // デバッグ表示も確認（これは実行時にコンソールに出るよ）
        println!("作成したカード: {:?}", card);
    }

    #[test]
    fn rank_comparison() {
        // ランクの大小比較がちゃんとできるか確認
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King > Rank::Ace);
        assert_eq!(Rank::Seven, Rank::Seven);

        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn rank_as_number() {
        // Ace = 1 から King = 13 までの数値変換を確認。
        // ルール判定は全部この変換に乗っかってるから、ここが崩れると全部崩れる！
        assert_eq!(Rank::Ace as usize, 1);
        assert_eq!(Rank::Ten as usize, 10);
        assert_eq!(Rank::Jack as usize, 11);
        assert_eq!(Rank::Queen as usize, 12);
        assert_eq!(Rank::King as usize, 13);
    }
}
