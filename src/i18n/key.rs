//! 翻訳キーと辞書
//!
//! キーは閉じた列挙型で、各ロケールの表は網羅的な `match` で書かれている。
//! どちらかのロケールで訳が欠けているとコンパイルが通らない。

use std::str::FromStr;

use super::Locale;

/// ページ上で使われる翻訳キー
///
/// 属性値（`data-i18n="nav.home"` など）との対応は [`TranslationKey::as_str`] を参照。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    NavHome,
    NavAbout,
    NavProjects,
    NavBlog,
    NavContact,
    HeroGreeting,
    HeroTitle,
    HeroSubtitle,
    HeroCta,
    AboutTitle,
    AboutText,
    ProjectsTitle,
    ProjectsText,
    BlogTitle,
    BlogImage,
    BlogReadMore,
    ContactTitle,
    ContactNamePlaceholder,
    ContactEmailPlaceholder,
    ContactSubjectPlaceholder,
    ContactMessagePlaceholder,
    ContactSubmit,
    FormRequired,
    FormSending,
    FormSuccess,
    FormFailed,
    FormOffline,
    FooterText,
}

impl TranslationKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 28] = [
        Self::NavHome,
        Self::NavAbout,
        Self::NavProjects,
        Self::NavBlog,
        Self::NavContact,
        Self::HeroGreeting,
        Self::HeroTitle,
        Self::HeroSubtitle,
        Self::HeroCta,
        Self::AboutTitle,
        Self::AboutText,
        Self::ProjectsTitle,
        Self::ProjectsText,
        Self::BlogTitle,
        Self::BlogImage,
        Self::BlogReadMore,
        Self::ContactTitle,
        Self::ContactNamePlaceholder,
        Self::ContactEmailPlaceholder,
        Self::ContactSubjectPlaceholder,
        Self::ContactMessagePlaceholder,
        Self::ContactSubmit,
        Self::FormRequired,
        Self::FormSending,
        Self::FormSuccess,
        Self::FormFailed,
        Self::FormOffline,
        Self::FooterText,
    ];

    /// キーの属性値表現
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NavHome => "nav.home",
            Self::NavAbout => "nav.about",
            Self::NavProjects => "nav.projects",
            Self::NavBlog => "nav.blog",
            Self::NavContact => "nav.contact",
            Self::HeroGreeting => "hero.greeting",
            Self::HeroTitle => "hero.title",
            Self::HeroSubtitle => "hero.subtitle",
            Self::HeroCta => "hero.cta",
            Self::AboutTitle => "about.title",
            Self::AboutText => "about.text",
            Self::ProjectsTitle => "projects.title",
            Self::ProjectsText => "projects.text",
            Self::BlogTitle => "blog.title",
            Self::BlogImage => "blog.image",
            Self::BlogReadMore => "blog.readMore",
            Self::ContactTitle => "contact.title",
            Self::ContactNamePlaceholder => "contact.namePlaceholder",
            Self::ContactEmailPlaceholder => "contact.emailPlaceholder",
            Self::ContactSubjectPlaceholder => "contact.subjectPlaceholder",
            Self::ContactMessagePlaceholder => "contact.messagePlaceholder",
            Self::ContactSubmit => "contact.submit",
            Self::FormRequired => "form.required",
            Self::FormSending => "form.sending",
            Self::FormSuccess => "form.success",
            Self::FormFailed => "form.failed",
            Self::FormOffline => "form.offline",
            Self::FooterText => "footer.text",
        }
    }

    /// 見出し系のキーか
    ///
    /// 見出しの訳はハイライト用の `<span>` を含むため、`innerHTML` として書き込む。
    #[must_use]
    pub const fn is_markup(self) -> bool {
        matches!(
            self,
            Self::HeroTitle
                | Self::AboutTitle
                | Self::ProjectsTitle
                | Self::BlogTitle
                | Self::ContactTitle
        )
    }

    /// 指定ロケールでの表示文字列
    #[must_use]
    pub const fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Tr => self.tr(),
            Locale::En => self.en(),
        }
    }

    /// トルコ語の表
    const fn tr(self) -> &'static str {
        match self {
            Self::NavHome => "Ana Sayfa",
            Self::NavAbout => "Hakkımda",
            Self::NavProjects => "Projeler",
            Self::NavBlog => "Blog",
            Self::NavContact => "İletişim",
            Self::HeroGreeting => "Merhaba, Ben",
            Self::HeroTitle => "Yapay Zeka ve <span>Robotik</span> Mühendisi",
            Self::HeroSubtitle => {
                "Otonom sistemler, sensör füzyonu ve insan odaklı üretim üzerine çalışıyorum."
            }
            Self::HeroCta => "Benimle İletişime Geç",
            Self::AboutTitle => "<span>Hakkımda</span>",
            Self::AboutText => {
                "Robotik ve yapay zeka alanında, gerçek dünyada güvenle çalışan sistemler tasarlıyorum."
            }
            Self::ProjectsTitle => "<span>Projelerim</span>",
            Self::ProjectsText => "Üzerinde çalıştığım bazı projeler.",
            Self::BlogTitle => "Son <span>Yazılar</span>",
            Self::BlogImage => "Blog Görseli",
            Self::BlogReadMore => "Devamını Oku",
            Self::ContactTitle => "Bana <span>Ulaşın</span>",
            Self::ContactNamePlaceholder => "Adınız",
            Self::ContactEmailPlaceholder => "E-posta Adresiniz",
            Self::ContactSubjectPlaceholder => "Konu",
            Self::ContactMessagePlaceholder => "Mesajınız",
            Self::ContactSubmit => "Mesaj Gönder",
            Self::FormRequired => "Lütfen tüm zorunlu alanları doldurun.",
            Self::FormSending => "Gönderiliyor...",
            Self::FormSuccess => "Mesajınız başarıyla gönderildi! Teşekkürler.",
            Self::FormFailed => "Bir hata oluştu. Lütfen tekrar deneyin.",
            Self::FormOffline => "Bir hata oluştu. İnternet bağlantınızı kontrol edin.",
            Self::FooterText => "© 2026 Tüm hakları saklıdır.",
        }
    }

    /// 英語の表
    const fn en(self) -> &'static str {
        match self {
            Self::NavHome => "Home",
            Self::NavAbout => "About",
            Self::NavProjects => "Projects",
            Self::NavBlog => "Blog",
            Self::NavContact => "Contact",
            Self::HeroGreeting => "Hello, I'm",
            Self::HeroTitle => "AI and <span>Robotics</span> Engineer",
            Self::HeroSubtitle => {
                "I work on autonomous systems, sensor fusion and human-centric manufacturing."
            }
            Self::HeroCta => "Get in Touch",
            Self::AboutTitle => "About <span>Me</span>",
            Self::AboutText => {
                "I design robotics and AI systems that operate safely in the real world."
            }
            Self::ProjectsTitle => "My <span>Projects</span>",
            Self::ProjectsText => "Some of the projects I have worked on.",
            Self::BlogTitle => "Latest <span>Posts</span>",
            Self::BlogImage => "Blog Image",
            Self::BlogReadMore => "Read More",
            Self::ContactTitle => "Contact <span>Me</span>",
            Self::ContactNamePlaceholder => "Your Name",
            Self::ContactEmailPlaceholder => "Email Address",
            Self::ContactSubjectPlaceholder => "Subject",
            Self::ContactMessagePlaceholder => "Your Message",
            Self::ContactSubmit => "Send Message",
            Self::FormRequired => "Please fill in all required fields.",
            Self::FormSending => "Sending...",
            Self::FormSuccess => "Your message has been sent successfully! Thank you.",
            Self::FormFailed => "Something went wrong. Please try again.",
            Self::FormOffline => "Something went wrong. Please check your internet connection.",
            Self::FooterText => "© 2026 All rights reserved.",
        }
    }
}

/// 未知の翻訳キー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownKey;

impl FromStr for TranslationKey {
    type Err = UnknownKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key).ok_or(UnknownKey)
    }
}
