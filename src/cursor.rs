//! カスタムカーソル
//!
//! 小さなドットはポインタに即座に追従し、外側のリングはアニメーションで遅れて追いかける。

use crate::dom::{
    Element,
    Mutation,
};
use crate::types::Point;

/// ポインタ移動 1 回分の書き込み（ドット、リングの順）
#[must_use]
pub const fn pointer_moves(target: Point, duration_ms: u32) -> (Mutation, Mutation) {
    (Mutation::Position(target), Mutation::AnimatePosition { target, duration_ms })
}

/// カーソル追従
#[derive(Debug)]
pub struct CursorTracker<E> {
    /// ポインタ位置に即座に移動するドット
    dot: E,
    /// ポインタ位置へアニメーションするリング
    outline: E,
    /// リングのアニメーション時間
    duration_ms: u32,
}

impl<E: Element> CursorTracker<E> {
    #[must_use]
    pub const fn new(dot: E, outline: E, duration_ms: u32) -> Self {
        Self { dot, outline, duration_ms }
    }

    /// `pointermove` / `mousemove` ハンドラー
    ///
    /// 進行中のリングのアニメーションは新しい目標で置き換えられる。
    pub fn on_pointer_move(&self, position: Point) {
        let (dot, outline) = pointer_moves(position, self.duration_ms);
        self.dot.apply(&dot);
        self.outline.apply(&outline);
    }
}
