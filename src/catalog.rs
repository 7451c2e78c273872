//! Static completion sources that the scraper does not cover

/// Lua reserved words
pub const KEYWORDS: &[&str] = &[
    "and", "break", "do", "elseif", "else", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Global variables completed by name only
pub const GLOBAL_VARIABLES: &[&str] = &[
    "derma.Controls",
    "derma.SkinList",
    "jit.arch",
    "jit.os",
    "jit.version",
    "jit.version_num",
    "net.Receivers",
    "utf8.charpattern",
    "_VERSION",
    "CLIENT",
    "CLIENT_DLL",
    "SERVER",
    "GAME_DLL",
    "MENU_DLL",
    "GAMEMODE_NAME",
    "NULL",
    "VERSION",
    "VERSIONSTR",
    "BRANCH",
    "GAMEMODE",
    "GM",
    "ENT",
    "SWEP",
    "EFFECT",
    "_G",
    "_MODULES",
];

/// Global variables with a well-known value shown in the details pane
pub const VALUED_GLOBALS: &[(&str, &str)] = &[
    ("vector_origin", "Vector(0, 0, 0)"),
    ("vector_up", "Vector(0, 0, 1)"),
    ("angle_zero", "Angle(0, 0, 0)"),
    ("color_white", "Color(255, 255, 255, 255)"),
    ("color_black", "Color(0, 0, 0, 255)"),
    ("color_transparent", "Color(255, 255, 255, 0)"),
    ("math.huge", "∞"),
    ("math.pi", "π"),
];

/// Library functions that duplicate a valued global
pub const LIBRARY_EXCLUSIONS: &[&str] = &["math.huge", "math.pi"];
