/// 頁面上用到的圖示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Globe,
    Smartphone,
    ShoppingCart,
    Calendar,
    Settings,
    Crown,
    Shield,
    Building,
    Headphones,
    MessageCircle,
    Palette,
    Code,
    Rocket,
}

impl Icon {
    pub const DEFAULT: Icon = Icon::Globe;

    pub const ALL: [Icon; 13] = [
        Icon::Globe,
        Icon::Smartphone,
        Icon::ShoppingCart,
        Icon::Calendar,
        Icon::Settings,
        Icon::Crown,
        Icon::Shield,
        Icon::Building,
        Icon::Headphones,
        Icon::MessageCircle,
        Icon::Palette,
        Icon::Code,
        Icon::Rocket,
    ];

    /// 目錄裡使用的鍵
    pub fn key(self) -> &'static str {
        match self {
            Icon::Globe => "Globe",
            Icon::Smartphone => "Smartphone",
            Icon::ShoppingCart => "ShoppingCart",
            Icon::Calendar => "Calendar",
            Icon::Settings => "Settings",
            Icon::Crown => "Crown",
            Icon::Shield => "Shield",
            Icon::Building => "Building",
            Icon::Headphones => "Headphones",
            Icon::MessageCircle => "MessageCircle",
            Icon::Palette => "Palette",
            Icon::Code => "Code",
            Icon::Rocket => "Rocket",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Icon::Globe => "icon-globe",
            Icon::Smartphone => "icon-smartphone",
            Icon::ShoppingCart => "icon-shopping-cart",
            Icon::Calendar => "icon-calendar",
            Icon::Settings => "icon-settings",
            Icon::Crown => "icon-crown",
            Icon::Shield => "icon-shield",
            Icon::Building => "icon-building",
            Icon::Headphones => "icon-headphones",
            Icon::MessageCircle => "icon-message-circle",
            Icon::Palette => "icon-palette",
            Icon::Code => "icon-code",
            Icon::Rocket => "icon-rocket",
        }
    }
}

/// 鍵名區分大小寫；未知的鍵（包含空字串）一律回傳預設圖示
pub fn resolve_icon(key: &str) -> Icon {
    Icon::ALL
        .into_iter()
        .find(|icon| icon.key() == key)
        .unwrap_or_else(|| {
            tracing::debug!("Unknown icon key '{}', using {:?}", key, Icon::DEFAULT);
            Icon::DEFAULT
        })
}
