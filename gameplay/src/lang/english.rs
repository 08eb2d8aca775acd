pub const GOTARMOR: &str = "Picked up the armor.";
pub const GOTSTIM: &str = "Picked up a stimpack.";
pub const GOTMEDINEED: &str = "Picked up a medikit that you REALLY need!";
pub const GOTMEDIKIT: &str = "Picked up a medikit.";

pub const GOTBLUECARD: &str = "Picked up a blue keycard.";
pub const GOTYELWCARD: &str = "Picked up a yellow keycard.";
pub const GOTREDCARD: &str = "Picked up a red keycard.";
pub const GOTBLUESKUL: &str = "Picked up a blue skull key.";
pub const GOTYELWSKUL: &str = "Picked up a yellow skull key.";
pub const GOTREDSKULL: &str = "Picked up a red skull key.";

pub const PD_BLUEO: &str = "You need a blue key to activate this object";
pub const PD_REDO: &str = "You need a red key to activate this object";
pub const PD_YELLOWO: &str = "You need a yellow key to activate this object";
pub const PD_BLUEK: &str = "You need a blue key to open this door";
pub const PD_REDK: &str = "You need a red key to open this door";
pub const PD_YELLOWK: &str = "You need a yellow key to open this door";
/// Boom locked doors that want every key
pub const PD_ALL3: &str = "You need all three keys to open this door";
pub const PD_ALL6: &str = "You need all six keys to open this door";
pub const PD_ANY: &str = "Any key will open this door";

pub const SECRETFOUND: &str = "A secret is revealed!";
