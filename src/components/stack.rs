// src/components/stack.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Serialize, Deserialize};

use crate::components::card::Card;

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
/// Clone, Copy: 値を簡単に複製できるようにする。
/// Debug: println! などで中身をデバッグ表示できるようにする。
/// PartialEq, Eq: == 演算子で比較できるようにする。
/// Serialize, Deserialize: この Enum を JSON 形式に変換したり、JSON から戻したりできるようにする！これが重要！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つある。
    /// 番号 (0-3) で管理するよ。
    /// 0: Heart, 1: Diamond, 2: Club, 3: Spade みたいな感じで！
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

/// 山札・捨て札・組札・場札、全部のカード置き場をまとめて持つ構造体だよ！🗂️
///
/// どの置き場も `Vec<Card>` で、**末尾 (最後の要素) が一番上のカード**という約束。
/// push/pop はぜんぶ末尾に対して行うから、Vec の操作とぴったり対応するんだ。
///
/// ここは純粋な「入れ物」！ルールチェックは一切やらないよ。
/// それは logic::rules 側の仕事。役割分担が大事！🧹✨
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stacks {
    /// 山札。全部裏向き。
    pub stock: Vec<Card>,
    /// 捨て札。一番上だけが見えて、プレイできる。
    pub waste: Vec<Card>,
    /// 組札4つ。インデックスはスートに対応 (0: Heart, 1: Diamond, 2: Club, 3: Spade)。
    pub foundations: [Vec<Card>; 4],
    /// 場札7列。裏向きの下積みと、表向きの連なり (face-up run) でできてる。
    pub tableau: [Vec<Card>; 7],
}

impl Stacks {
    /// 全部空っぽの Stacks を作るよ。配り直しの起点！
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した置き場のカード列への参照を返すよ。
    ///
    /// インデックスが範囲外 (Tableau の 7 以上とか) なら None。
    /// 不正なインデックスで panic しないように Option で返すのがポイント！
    pub fn cards(&self, stack: StackType) -> Option<&Vec<Card>> {
        match stack {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Tableau(i) => self.tableau.get(i as usize),
        }
    }

    /// `cards` の可変参照バージョン。
    pub fn cards_mut(&mut self, stack: StackType) -> Option<&mut Vec<Card>> {
        match stack {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Tableau(i) => self.tableau.get_mut(i as usize),
        }
    }

    /// 指定した置き場の一番上のカードを覗くよ。空なら None。
    pub fn top_card(&self, stack: StackType) -> Option<&Card> {
        self.cards(stack).and_then(|cards| cards.last())
    }

    /// 指定した置き場の枚数。置き場自体が無効なら 0 扱い。
    pub fn len(&self, stack: StackType) -> usize {
        self.cards(stack).map_or(0, |cards| cards.len())
    }

    /// 指定した置き場が空かどうか。
    pub fn is_empty(&self, stack: StackType) -> bool {
        self.len(stack) == 0
    }

    /// 一番上にカードを積むよ。置き場が無効なら何もしない。
    pub fn push_card(&mut self, stack: StackType, card: Card) {
        if let Some(cards) = self.cards_mut(stack) {
            cards.push(card);
        }
    }

    /// 一番上のカードを取り除いて返すよ。空なら None。
    pub fn pop_card(&mut self, stack: StackType) -> Option<Card> {
        self.cards_mut(stack).and_then(|cards| cards.pop())
    }

    /// 組札4つの合計枚数。勝利判定 (52枚で勝ち！) に使うよ。🏆
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(|f| f.len()).sum()
    }

    /// 全置き場のカードを順番に走査するイテレータ。
    /// 「52枚ちょうど・重複なし」の閉じた系になってるかのチェックで使う！
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
    }
}
