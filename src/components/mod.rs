// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod stack; // カード置き場 (StackType と Stacks) はここ！🗂️
pub mod game_state; // ゲーム全体の状態 (GameState) はここ！

// よく使う型は再エクスポートしておくと、使う側が楽ちん！✨
pub use card::{Card, Rank, Suit};
pub use game_state::{GameState, GameStatus};
pub use stack::{StackType, Stacks};
