//! Upgrading of ID3v2.2 frame IDs

use std::collections::HashMap;
use std::sync::OnceLock;

/// Upgrade an ID3v2.2 frame ID to its ID3v2.3 equivalent
///
/// Only the IDs of frames with an identical layout across versions are upgraded. Anything else
/// (such as `PIC`, which stores an image format rather than a MIME type) maps to `None`.
pub(crate) fn upgrade_v2(key: &str) -> Option<&'static str> {
	v2keys().get(key).copied()
}

macro_rules! gen_upgrades {
	($($v2_key:literal => $v3_key:literal),+ $(,)?) => {
		fn v2keys() -> &'static HashMap<&'static str, &'static str> {
			static INSTANCE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
			INSTANCE.get_or_init(|| HashMap::from([$(($v2_key, $v3_key)),+]))
		}
	};
}

gen_upgrades!(
	// Text information
	"TAL" => "TALB",
	"TCM" => "TCOM",
	"TCO" => "TCON",
	"TCR" => "TCOP",
	"TDA" => "TDAT",
	"TDY" => "TDLY",
	"TEN" => "TENC",
	"TFT" => "TFLT",
	"TIM" => "TIME",
	"TKE" => "TKEY",
	"TLA" => "TLAN",
	"TLE" => "TLEN",
	"TMT" => "TMED",
	"TOA" => "TOPE",
	"TOF" => "TOFN",
	"TOL" => "TOLY",
	"TOR" => "TORY",
	"TOT" => "TOAL",
	"TP1" => "TPE1",
	"TP2" => "TPE2",
	"TP3" => "TPE3",
	"TP4" => "TPE4",
	"TPA" => "TPOS",
	"TPB" => "TPUB",
	"TRC" => "TSRC",
	"TRD" => "TRDA",
	"TRK" => "TRCK",
	"TSI" => "TSIZ",
	"TSS" => "TSSE",
	"TT1" => "TIT1",
	"TT2" => "TIT2",
	"TT3" => "TIT3",
	"TXT" => "TEXT",
	"TYE" => "TYER",

	// URL links
	"WAF" => "WOAF",
	"WAR" => "WOAR",
	"WAS" => "WOAS",
	"WCM" => "WCOM",
	"WCP" => "WCOP",
	"WPB" => "WPUB",
	"WXX" => "WXXX",

	// Language frames
	"COM" => "COMM",
	"ULT" => "USLT",
);
