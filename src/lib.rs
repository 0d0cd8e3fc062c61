// src/lib.rs

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // components モジュールを宣言 (カード、置き場、ゲーム状態)
pub mod logic;      // logic モジュールを宣言 (デッキ生成と純粋なルール判定)
pub mod systems;    // systems モジュールを宣言 (状態を変更する処理)
pub mod protocol;   // protocol モジュールを宣言 (プレゼンテーション層との境界)

// 各モジュールから必要な型をインポート！
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::logic::rules::{find_card_index, is_move_valid};
use crate::protocol::{GameSnapshot, GameWonEvent, MoveIntent};
use crate::systems::stock_system::StockAction;
use crate::systems::{deal_system, move_card_system, stock_system, win_condition_system};

use log::{debug, info};
use std::time::Instant;

// --- ゲーム全体を管理する構造体 ---

/// ソリティア1ゲームぶんの状態機械だよ！🎮
///
/// プレゼンテーション層からのイベント (カード移動の意思表示、山札クリック、
/// 新しいゲーム、タイマーのティック) を1つずつ受け取って、ルール判定 → 実行
/// までをその場で終わらせる。イベント処理の途中に別のイベントが割り込むことは
/// ない (シングルスレッド前提、`&mut self` がそれを保証してくれる！)。
///
/// 不正な移動は静かに `false` で断るだけ。状態は1ビットも変わらないよ。
pub struct GameApp {
    /// ゲームの全可変状態 (置き場・進行状態・移動カウンター)。
    state: GameState,
    /// タイマーの起点。新しいゲームのたびに「今」に更新されるよ。⏱️
    started_at: Instant,
    /// 最後に tick で計算した表示用の経過秒数。勝った瞬間の値で固定される。
    elapsed_seconds: u64,
    /// まだ受け取られていない勝利イベント。1ゲームにつき最大1個！
    pending_win: Option<GameWonEvent>,
}

impl GameApp {
    /// 新しいゲームを作って、カードを配り終えた状態で返すよ。
    /// 配り (Dealing) は一瞬で終わって、すぐ Playing になる！
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        let mut app = Self {
            state: GameState::new(),
            started_at: Instant::now(),
            elapsed_seconds: 0,
            pending_win: None,
        };
        deal_system::deal(&mut app.state);
        info!("GameApp: Initialization complete.");
        app
    }

    /// ゲームをまるごと最初からやり直すよ。
    /// 置き場も移動カウンターもタイマーも全部リセット！
    pub fn request_new_game(&mut self) {
        info!("GameApp: request_new_game called.");
        self.state = GameState::new();
        deal_system::deal(&mut self.state);
        self.started_at = Instant::now();
        self.elapsed_seconds = 0;
        self.pending_win = None;
    }

    /// 山札がクリックされた時の処理だよ。
    /// めくる・リセットする・何もしない、のどれになったかを返す。
    /// 勝利後は何もしない (NoOp)。
    pub fn request_stock_draw(&mut self) -> StockAction {
        if self.state.status != GameStatus::Playing {
            debug!("GameApp: stock draw ignored (status = {:?})", self.state.status);
            return StockAction::NoOp;
        }
        stock_system::handle_stock_click(&mut self.state)
    }

    /// カード移動の意思表示を受け取って、ルール上OKなら実行するよ。
    ///
    /// 戻り値は「移動が成立したかどうか」。不成立でも何も壊れない。
    /// 検証 (logic::rules) と実行 (systems::move_card_system) は
    /// このメソッドの中で連続して行われるから、間に他のイベントは挟まらないよ。
    pub fn submit_move_intent(&mut self, intent: &MoveIntent) -> bool {
        if self.state.status != GameStatus::Playing {
            debug!("GameApp: move intent ignored (status = {:?})", self.state.status);
            return false;
        }

        // --- 1. 掴んだカードを移動元の中から探す ---
        let Some(source_index) = find_card_index(&self.state.stacks, intent.from, intent.suit, intent.rank) else {
            debug!("GameApp: {:?} of {:?} not found in {:?}", intent.rank, intent.suit, intent.from);
            return false;
        };

        // --- 2. ルール判定 ---
        if !is_move_valid(&self.state.stacks, intent.from, source_index, intent.to) {
            debug!("GameApp: move rejected: {:?}", intent);
            return false;
        }

        // --- 3. 実行！ ---
        move_card_system::apply_move(&mut self.state, intent.from, source_index, intent.to);

        // --- 4. 組札への移動なら勝利判定 ---
        if matches!(intent.to, StackType::Foundation(_)) && win_condition_system::run(&mut self.state) {
            // 勝った瞬間の手数と秒数を記録。タイマー表示もここで固定！
            self.elapsed_seconds = self.started_at.elapsed().as_secs();
            self.pending_win = Some(GameWonEvent {
                move_count: self.state.move_count,
                elapsed_seconds: self.elapsed_seconds,
            });
        }

        true
    }

    /// タイマーのティック (1秒ごとに呼ばれる想定) だよ。⏱️
    ///
    /// 経過秒数を計算して表示用の値を更新して返すだけ。
    /// ゲームの状態 (カードや手数) には絶対に触らない！
    /// 勝利後は勝った瞬間の値のまま止まるよ。
    pub fn tick(&mut self) -> u64 {
        if self.state.status != GameStatus::Won {
            self.elapsed_seconds = self.started_at.elapsed().as_secs();
        }
        self.elapsed_seconds
    }

    /// 現在の状態のスナップショットを撮るよ。📸
    /// 状態が変わる操作のあとに呼んで、画面の再描画に使ってもらう想定！
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state, self.elapsed_seconds)
    }

    /// スナップショットを JSON 文字列にして返すヘルパー。
    /// JSON が欲しいプレゼンテーション層向けのおまけだよ。
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    /// 成立した操作の回数。
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    /// 最後に tick した時点の経過秒数 (表示用)。
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// いまのゲーム進行状態。
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// ゲーム状態への読み取り専用アクセス。描画やデバッグ用だよ。
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// 勝利イベントを受け取るよ。🏆
    /// 勝った後の最初の呼び出しだけ Some で、以降はずっと None。
    /// 「おめでとう！」の表示が二重に出ないようにするための仕組み！
    pub fn take_win_event(&mut self) -> Option<GameWonEvent> {
        self.pending_win.take()
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
