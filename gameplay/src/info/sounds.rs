use serde::{Deserialize, Serialize};

/// Sound effects the level asks the audio layer to play
#[allow(non_camel_case_types)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SfxName {
    #[default]
    None,
    pistol,
    barexp,
    firsht,
    firxpl,
    rlaunc,
    rxplod,
    telept,
    doropn,
    dorcls,
    bdopn,
    bdcls,
    pstart,
    pstop,
    stnmov,
    swtchn,
    swtchx,
    plpain,
    pldeth,
    pdiehi,
    slop,
    itemup,
    oof,
    noway,
    posit1,
    podth1,
    popain,
    posact,
    bgsit1,
    bgdth1,
    bgact,
    sgtsit,
    sgtdth,
    dmpain,
    dmact,
    brssit,
    brsdth,
    kntsit,
    kntdth,
}
