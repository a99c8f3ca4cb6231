//! スクロール位置に応じたナビゲーションリンクの強調と固定ヘッダー

use crate::config::ScrollSettings;
use crate::dom::{
    Element,
    Mutation,
};
use crate::types::SectionBox;

/// 現在のセクションに対応するリンクへ付けるクラス
pub const ACTIVE_CLASS: &str = "active";
/// スクロール後のヘッダーに付けるクラス
pub const STICKY_CLASS: &str = "sticky";

/// `scroll_y` の時点でアクティブなセクション
///
/// 複数のセクションの範囲が重なる場合は、ドキュメント順で最後に一致したものを返す。
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBox], offset: i32) -> Option<&SectionBox> {
    sections.iter().rev().find(|section| section.contains(scroll_y, offset))
}

/// ヘッダーを固定表示するか（端数のあるスクロール量もそのまま比較する）
#[must_use]
pub fn is_sticky(scroll_y: f64, threshold: i32) -> bool {
    scroll_y > f64::from(threshold)
}

/// Checks if a navigation link's `href` points at the section `id`.
///
/// Only the fragment is compared, so `#about` and `/index.html#about` both target `about`.
#[must_use]
pub fn link_targets(href: &str, id: &str) -> bool {
    href.rsplit_once('#').is_some_and(|(_, fragment)| fragment == id)
}

/// スクロールナビゲーター
#[derive(Debug)]
pub struct ScrollNavigator<E> {
    /// ページのセクション（ドキュメント順）
    sections: Vec<E>,
    /// ヘッダー内のナビゲーションリンク
    links: Vec<E>,
    /// ヘッダー
    header: E,
    /// しきい値
    settings: ScrollSettings,
}

impl<E: Element> ScrollNavigator<E> {
    #[must_use]
    pub const fn new(sections: Vec<E>, links: Vec<E>, header: E, settings: ScrollSettings) -> Self {
        Self { sections, links, header, settings }
    }

    /// 現在のセクションの位置を読み取る（`id` の無いセクションは対象外）
    fn section_boxes(&self) -> Vec<SectionBox> {
        self.sections
            .iter()
            .filter_map(|section| {
                let id = section.attribute("id")?;
                Some(SectionBox { id, layout: section.layout() })
            })
            .collect()
    }

    /// `scroll` ハンドラー
    ///
    /// どのセクションにも一致しない場合、リンクの状態は変更しない。
    pub fn on_scroll(&self, scroll_y: f64) {
        let sections = self.section_boxes();

        if let Some(section) = active_section(scroll_y, &sections, self.settings.section_offset) {
            for link in &self.links {
                link.apply(&Mutation::Class { name: ACTIVE_CLASS, enabled: false });
            }

            let target = self.links.iter().find(|link| {
                link.attribute("href").is_some_and(|href| link_targets(&href, &section.id))
            });
            match target {
                Some(link) => link.apply(&Mutation::Class { name: ACTIVE_CLASS, enabled: true }),
                None => tracing::debug!("No navigation link for section '{}'", section.id),
            }
        }

        self.header.apply(&Mutation::Class {
            name: STICKY_CLASS,
            enabled: is_sticky(scroll_y, self.settings.sticky_threshold),
        });
    }
}
