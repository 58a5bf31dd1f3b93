pub struct MonsterListPaneNames;

impl MonsterListPaneNames {
    pub const HOME: &'static str = "home";
    pub const ID: &'static str = "id";
    pub const REFRESH: &'static str = "refresh";
    pub const RESET: &'static str = "reset";
}

pub struct IdMenuPaneNames;

impl IdMenuPaneNames {
    pub const LEFT: &'static str = "left";
    pub const RIGHT: &'static str = "right";
    pub const ID: &'static str = "id";
    pub const EVOS: &'static str = "evos";
    pub const MATERIALS: &'static str = "materials";
    pub const PIC: &'static str = "pic";
    pub const PANTHEON: &'static str = "pantheon";
    pub const OTHER_INFO: &'static str = "otherinfo";
    pub const REFRESH: &'static str = "refresh";
}

/// glyphs every menu shares
pub struct GlobalEmoji;

impl GlobalEmoji {
    pub const HOME: &'static str = "\u{1F3E0}";
    pub const REFRESH: &'static str = "\u{1F504}";
    pub const RESET: &'static str = "\u{23EB}";
    pub const DELETE: &'static str = "\u{274C}";
}
