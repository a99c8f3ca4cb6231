//! ブログカードの描画

use std::fmt::Write as _;

use crate::dom::{
    Element,
    Mutation,
};
use crate::i18n::{
    Locale,
    TranslationKey,
};

/// A blog post preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
}

/// The posts shown on the page, newest first.
pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Yapay Zeka ve Etik",
        excerpt: "Otonom sistemlerin karar verme süreçlerinde karşılaşılan etik problemler ve çözüm yaklaşımları.",
        date: "12 Ocak 2026",
    },
    BlogPost {
        title: "Robotik Sistemlerde Sensör Füzyonu",
        excerpt: "Lidar, Radar ve Kamera verilerinin birleştirilerek daha hassas haritalama yapılması.",
        date: "5 Ocak 2026",
    },
    BlogPost {
        title: "Endüstri 5.0 ve İnsan Odaklı Üretim",
        excerpt: "Robotların insanlarla işbirliği içinde çalıştığı yeni endüstriyel devrim ne getiriyor?",
        date: "28 Aralık 2025",
    },
];

/// カード 1 枚分のマークアップを `out` に追記する
///
/// 画像ラベルと「続きを読む」リンクには翻訳キーを付け、言語切り替えの対象にする。
/// 初期テキストは既定ロケール（トルコ語）。投稿は静的なのでエスケープしない。
fn write_card(out: &mut String, post: &BlogPost) {
    let image = TranslationKey::BlogImage;
    let read_more = TranslationKey::BlogReadMore;

    // String への書き込みは失敗しない
    let _ = write!(
        out,
        r##"
        <div class="blog-box">
            <div class="blog-img" data-i18n="{image_key}">{image_text}</div>
            <div class="blog-content">
                <h4>{title}</h4>
                <p>{excerpt}</p>
                <a href="#" class="read-more" data-i18n="{read_more_key}">{read_more_text}</a>
            </div>
        </div>
    "##,
        image_key = image.as_str(),
        image_text = image.text(Locale::Tr),
        title = post.title,
        excerpt = post.excerpt,
        read_more_key = read_more.as_str(),
        read_more_text = read_more.text(Locale::Tr),
    );
}

/// 全投稿のカードを連結したマークアップ
#[must_use]
pub fn posts_markup(posts: &[BlogPost]) -> String {
    posts.iter().fold(String::new(), |mut out, post| {
        write_card(&mut out, post);
        out
    })
}

/// コンテナの中身をカード一覧で一度に置き換える
pub fn render_posts(posts: &[BlogPost], container: &impl Element) {
    tracing::debug!("Rendering {} blog posts", posts.len());
    container.apply(&Mutation::Markup(posts_markup(posts)));
}
