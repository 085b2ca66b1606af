//! Static IRCC command table.
//!
//! Names follow the vendor's remote-key naming. Several names share one code
//! (`Enter`/`Num12`, `Sleep`/`PowerOff`, ...); those are vendor aliases.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Every known command as `(name, code)`, in declaration order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("Num1", "AAAAAQAAAAEAAAAAAw=="),
    ("Num2", "AAAAAQAAAAEAAAABAw=="),
    ("Num3", "AAAAAQAAAAEAAAACAw=="),
    ("Num4", "AAAAAQAAAAEAAAADAw=="),
    ("Num5", "AAAAAQAAAAEAAAAEAw=="),
    ("Num6", "AAAAAQAAAAEAAAAFAw=="),
    ("Num7", "AAAAAQAAAAEAAAAGAw=="),
    ("Num8", "AAAAAQAAAAEAAAAHAw=="),
    ("Num9", "AAAAAQAAAAEAAAAIAw=="),
    ("Num0", "AAAAAQAAAAEAAAAJAw=="),
    ("Num11", "AAAAAQAAAAEAAAAKAw=="),
    ("Num12", "AAAAAQAAAAEAAAALAw=="),
    ("Enter", "AAAAAQAAAAEAAAALAw=="),
    ("GGuide", "AAAAAQAAAAEAAAAOAw=="),
    ("ChannelUp", "AAAAAQAAAAEAAAAQAw=="),
    ("ChannelDown", "AAAAAQAAAAEAAAARAw=="),
    ("VolumeUp", "AAAAAQAAAAEAAAASAw=="),
    ("VolumeDown", "AAAAAQAAAAEAAAATAw=="),
    ("Mute", "AAAAAQAAAAEAAAAUAw=="),
    ("TvPower", "AAAAAQAAAAEAAAAVAw=="),
    ("Audio", "AAAAAQAAAAEAAAAXAw=="),
    ("MediaAudioTrack", "AAAAAQAAAAEAAAAXAw=="),
    ("Tv", "AAAAAQAAAAEAAAAkAw=="),
    ("Input", "AAAAAQAAAAEAAAAlAw=="),
    ("TvInput", "AAAAAQAAAAEAAAAlAw=="),
    ("TvAntennaCable", "AAAAAQAAAAEAAAAqAw=="),
    ("WakeUp", "AAAAAQAAAAEAAAAuAw=="),
    ("PowerOff", "AAAAAQAAAAEAAAAvAw=="),
    ("Sleep", "AAAAAQAAAAEAAAAvAw=="),
    ("Right", "AAAAAQAAAAEAAAAzAw=="),
    ("Left", "AAAAAQAAAAEAAAA0Aw=="),
    ("SleepTimer", "AAAAAQAAAAEAAAA2Aw=="),
    ("Analog2", "AAAAAQAAAAEAAAA4Aw=="),
    ("TvAnalog", "AAAAAQAAAAEAAAA4Aw=="),
    ("Display", "AAAAAQAAAAEAAAA6Aw=="),
    ("Jump", "AAAAAQAAAAEAAAA7Aw=="),
    ("PicOff", "AAAAAQAAAAEAAAA+Aw=="),
    ("PictureOff", "AAAAAQAAAAEAAAA+Aw=="),
    ("Teletext", "AAAAAQAAAAEAAAA/Aw=="),
    ("Video1", "AAAAAQAAAAEAAABAAw=="),
    ("Video2", "AAAAAQAAAAEAAABBAw=="),
    ("AnalogRgb1", "AAAAAQAAAAEAAABDAw=="),
    ("Home", "AAAAAQAAAAEAAABgAw=="),
    ("Exit", "AAAAAQAAAAEAAABjAw=="),
    ("PictureMode", "AAAAAQAAAAEAAABkAw=="),
    ("Confirm", "AAAAAQAAAAEAAABlAw=="),
    ("Up", "AAAAAQAAAAEAAAB0Aw=="),
    ("Down", "AAAAAQAAAAEAAAB1Aw=="),
    ("ClosedCaption", "AAAAAgAAAKQAAAAQAw=="),
    ("Component1", "AAAAAgAAAKQAAAA2Aw=="),
    ("Component2", "AAAAAgAAAKQAAAA3Aw=="),
    ("Wide", "AAAAAgAAAKQAAAA9Aw=="),
    ("EPG", "AAAAAgAAAKQAAABbAw=="),
    ("PAP", "AAAAAgAAAKQAAAB3Aw=="),
    ("TenKey", "AAAAAgAAAJcAAAAMAw=="),
    ("BSCS", "AAAAAgAAAJcAAAAQAw=="),
    ("Ddata", "AAAAAgAAAJcAAAAVAw=="),
    ("Stop", "AAAAAgAAAJcAAAAYAw=="),
    ("Pause", "AAAAAgAAAJcAAAAZAw=="),
    ("Play", "AAAAAgAAAJcAAAAaAw=="),
    ("Rewind", "AAAAAgAAAJcAAAAbAw=="),
    ("Forward", "AAAAAgAAAJcAAAAcAw=="),
    ("DOT", "AAAAAgAAAJcAAAAdAw=="),
    ("Rec", "AAAAAgAAAJcAAAAgAw=="),
    ("Return", "AAAAAgAAAJcAAAAjAw=="),
    ("Blue", "AAAAAgAAAJcAAAAkAw=="),
    ("Red", "AAAAAgAAAJcAAAAlAw=="),
    ("Green", "AAAAAgAAAJcAAAAmAw=="),
    ("Yellow", "AAAAAgAAAJcAAAAnAw=="),
    ("SubTitle", "AAAAAgAAAJcAAAAoAw=="),
    ("CS", "AAAAAgAAAJcAAAArAw=="),
    ("BS", "AAAAAgAAAJcAAAAsAw=="),
    ("Digital", "AAAAAgAAAJcAAAAyAw=="),
    ("Options", "AAAAAgAAAJcAAAA2Aw=="),
    ("Media", "AAAAAgAAAJcAAAA4Aw=="),
    ("Prev", "AAAAAgAAAJcAAAA8Aw=="),
    ("Next", "AAAAAgAAAJcAAAA9Aw=="),
    ("DpadCenter", "AAAAAgAAAJcAAABKAw=="),
    ("CursorUp", "AAAAAgAAAJcAAABPAw=="),
    ("CursorDown", "AAAAAgAAAJcAAABQAw=="),
    ("CursorLeft", "AAAAAgAAAJcAAABNAw=="),
    ("CursorRight", "AAAAAgAAAJcAAABOAw=="),
    ("ShopRemoteControlForcedDynamic", "AAAAAgAAAJcAAABqAw=="),
    ("FlashPlus", "AAAAAgAAAJcAAAB4Aw=="),
    ("FlashMinus", "AAAAAgAAAJcAAAB5Aw=="),
    ("AudioQualityMode", "AAAAAgAAAJcAAAB7Aw=="),
    ("DemoMode", "AAAAAgAAAJcAAAB8Aw=="),
    ("Analog", "AAAAAgAAAHcAAAANAw=="),
    ("Mode3D", "AAAAAgAAAHcAAABNAw=="),
    ("DigitalToggle", "AAAAAgAAAHcAAABSAw=="),
    ("DemoSurround", "AAAAAgAAAHcAAAB7Aw=="),
    ("*AD", "AAAAAgAAABoAAAA7Aw=="),
    ("AudioMixUp", "AAAAAgAAABoAAAA8Aw=="),
    ("AudioMixDown", "AAAAAgAAABoAAAA9Aw=="),
    ("PhotoFrame", "AAAAAgAAABoAAABVAw=="),
    ("Tv_Radio", "AAAAAgAAABoAAABXAw=="),
    ("SyncMenu", "AAAAAgAAABoAAABYAw=="),
    ("Hdmi1", "AAAAAgAAABoAAABaAw=="),
    ("Hdmi2", "AAAAAgAAABoAAABbAw=="),
    ("Hdmi3", "AAAAAgAAABoAAABcAw=="),
    ("Hdmi4", "AAAAAgAAABoAAABdAw=="),
    ("TopMenu", "AAAAAgAAABoAAABgAw=="),
    ("PopUpMenu", "AAAAAgAAABoAAABhAw=="),
    ("OneTouchTimeRec", "AAAAAgAAABoAAABkAw=="),
    ("OneTouchView", "AAAAAgAAABoAAABlAw=="),
    ("DUX", "AAAAAgAAABoAAABzAw=="),
    ("FootballMode", "AAAAAgAAABoAAAB2Aw=="),
    ("iManual", "AAAAAgAAABoAAAB7Aw=="),
    ("Netflix", "AAAAAgAAABoAAAB8Aw=="),
    ("Assists", "AAAAAgAAAMQAAAA7Aw=="),
    ("ActionMenu", "AAAAAgAAAMQAAABLAw=="),
    ("Help", "AAAAAgAAAMQAAABNAw=="),
    ("TvSatellite", "AAAAAgAAAMQAAABOAw=="),
    ("WirelessSubwoofer", "AAAAAgAAAMQAAAB+Aw=="),
];

/// Immutable name -> code lookup built once on first use.
#[derive(Debug)]
pub struct CommandTable {
    by_name: HashMap<&'static str, &'static str>,
}

impl CommandTable {
    fn build() -> Self {
        Self {
            by_name: COMMANDS.iter().copied().collect(),
        }
    }

    /// Process-wide table.
    pub fn global() -> &'static CommandTable {
        static TABLE: OnceLock<CommandTable> = OnceLock::new();
        TABLE.get_or_init(Self::build)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).copied()
    }

    /// First declared name for a code, used when logging raw codes.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        COMMANDS.iter().find(|(_, c)| *c == code).map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        COMMANDS.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Shorthand for `CommandTable::global().lookup(name)`.
pub fn lookup(name: &str) -> Option<&'static str> {
    CommandTable::global().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine};
    use std::collections::HashSet;

    #[test]
    fn every_name_resolves_to_a_non_empty_code() {
        let table = CommandTable::global();
        for (name, code) in COMMANDS {
            let found = table.lookup(name).expect("declared name must resolve");
            assert!(!found.is_empty(), "{name} has an empty code");
            assert_eq!(found, *code);
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        assert_eq!(lookup("VolumeUp"), lookup("VolumeUp"));
        assert_eq!(lookup("VolumeUp"), Some("AAAAAQAAAAEAAAASAw=="));
    }

    #[test]
    fn unknown_names_are_absent() {
        assert_eq!(lookup("NoSuchButton"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("volumeup"), None);
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = COMMANDS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), COMMANDS.len());
        assert_eq!(CommandTable::global().len(), COMMANDS.len());
    }

    #[test]
    fn codes_are_valid_base64() {
        for (name, code) in COMMANDS {
            let raw = general_purpose::STANDARD
                .decode(code)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(raw.len(), 13, "{name} decodes to an unexpected length");
        }
    }

    #[test]
    fn core_buttons_are_present() {
        for name in [
            "TvPower",
            "VolumeUp",
            "VolumeDown",
            "ChannelUp",
            "ChannelDown",
            "Num0",
            "Num1",
            "Num2",
            "Num3",
            "Num4",
            "Num5",
            "Num6",
            "Num7",
            "Num8",
            "Num9",
        ] {
            assert!(lookup(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn vendor_aliases_share_codes() {
        assert_eq!(lookup("Enter"), lookup("Num12"));
        assert_eq!(lookup("Sleep"), lookup("PowerOff"));
        assert_eq!(lookup("Input"), lookup("TvInput"));
        assert_ne!(lookup("Num1"), lookup("Num2"));
    }

    #[test]
    fn reverse_lookup_prefers_first_declared_name() {
        let table = CommandTable::global();
        assert_eq!(table.name_for("AAAAAQAAAAEAAAALAw=="), Some("Num12"));
        assert_eq!(table.name_for("AAAAAQAAAAEAAAAvAw=="), Some("PowerOff"));
        assert_eq!(table.name_for("bogus"), None);
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let first: Vec<_> = CommandTable::global().iter().take(2).map(|(n, _)| n).collect();
        assert_eq!(first, vec!["Num1", "Num2"]);
    }
}
