//! The shipped symbol universe.
//!
//! Every listed equity and bond code known on the exchange, assembled during
//! initial research. The harvesting engine receives this through
//! `HarvestConfig`; pass `--symbols-file` to run against a different set
//! without rebuilding.

/// Default symbol universe for full and incremental runs.
pub const DEFAULT_UNIVERSE: &[&str] = &[
    "11OK", "ADIN", "AITO", "ALK", "ALKB", "AMBR", "AMEH", "APTK", "ATPP", "AUMK",
    "BANA", "BGOR", "BIKF", "BIM", "BLTU", "CBNG", "CEVI", "CKB", "CKBKO2", "DEBA",
    "DIMI", "EDST", "ELMA", "ENER", "EUHA", "EVRO", "FAKM", "FERS", "FKBR", "FKPO",
    "FKTK", "FUBT", "GALE", "GDKM", "GIMS", "GRDN", "GRNT", "GRZD", "GTC", "GTRG",
    "GUMA", "IJUG", "INB", "INBR", "INDI", "INHO", "INOV", "INPR", "INTP", "JAKO",
    "JULI", "JUSK", "KARO", "KJUBI", "KKFI", "KLST", "KMB", "KMPR", "KOMU", "KONF",
    "KONZ", "KORZ", "KPSS", "KVAS", "LOTO", "LOZP", "M010428", "M010428D", "M010931D",
    "M011133D", "M011231D", "M011237", "M020126", "M020127", "M021132D", "M030337",
    "M030338", "M031131D", "M031230D", "M031235D", "M040336", "M040532D", "M040630D",
    "M040837", "M040837D", "M040838", "M050836", "M050939", "M051032D", "M051234D",
    "M060240", "M060328D", "M060340", "M060432D", "M060629", "M060639", "M060732D",
    "M060830D", "M060850D", "M070329", "M070339", "M070426D", "M070530D", "M070633",
    "M070932D", "M070938", "M070938D", "M071134", "M071232D", "M080229", "M080239",
    "M080333D", "M080632D", "M080731D", "M080834D", "M080839", "M081030D", "M090238",
    "M090332D", "M090631D", "M090730D", "M090833D", "M090937", "M090937D", "M091027",
    "M091040", "M100128", "M100140", "M100428", "M100440", "M100526", "M100539",
    "M100740", "M100832D", "M101039", "M110128", "M110133D", "M110139", "M110226",
    "M110226D", "M110231D", "M110538", "M110739", "M120132D", "M120138", "M120230D",
    "M120330D", "M120439", "M120439D", "M120537", "M121227D", "M121229", "M130137",
    "M130235", "M130738", "M131037", "M131140", "M140126D", "M140131D", "M140136",
    "M140431D", "M140437D", "M140526", "M141031D", "M141036", "M141126", "M141139",
    "M141226", "M141238", "M150233D", "M150436", "M150436D", "M150638", "M150638D",
    "M151030", "M151030D", "M160232D", "M160430D", "M160534", "M160637", "M160637D",
    "M160936", "M161138", "M170228", "M170230", "M170331D", "M170636", "M170636D",
    "M170832D", "M170930D", "M171137", "M171225D", "M180449D", "M180635", "M180749D",
    "M180826", "M180826D", "M180831D", "M180837D", "M180927", "M180940", "M181048D",
    "M181136D", "M190627", "M190628", "M190640", "M190640D", "M190748D", "M190927",
    "M190934", "M190939", "M191032D", "M191130D", "M200732D", "M200738", "M200830D",
    "M200933", "M200933D", "M210633D", "M210827", "M210840", "M210932D", "M210938",
    "M220131D", "M220528", "M220540", "M220632D", "M220931D", "M221133D", "M221231D",
    "M230332D", "M230631D", "M230730D", "M231132D", "M240326", "M240428", "M240930D",
    "M241225D", "M250133", "M250133D", "M250630D", "M251027", "M260132D", "M260230D",
    "M260330D", "M260448D", "M260538D", "M270830D", "M280131D", "M280234", "M280731D",
    "M281127", "M281238D", "M290632D", "M290638D", "M290931D", "M291030D", "M291035",
    "M291237", "M291237D", "M300150D", "M300332D", "M300338", "M300338D", "M300450D",
    "M300637", "M300730D", "M301132D", "M310149D", "M310331D", "M311049D", "MAGP",
    "MAKP", "MAKS", "MB", "MERM", "MKSD", "MLKR", "MODA", "MOKL", "MPOL", "MPT",
    "MTUR", "MZHE", "MZOV", "MZPU", "NEME", "NOSK", "OBIN", "OBMT", "OHTU", "OILK",
    "OKTA", "OMOS", "OPFO", "OPTK", "ORAN", "OSPO", "OTEK", "PALT", "PKB", "POPK",
    "PPIV", "PROD", "PROT", "RADE", "REPL", "RIMI", "RINS", "RMDEN15", "RMDEN16",
    "RMDEN17", "RMDEN18", "RMDEN19", "RMDEN20", "RMDEN21", "RMDEN22", "RMDEN23",
    "RZEK", "RZIT", "RZLE", "RZLV", "RZTK", "RZUG", "RZUS", "S2909331", "S2909332",
    "S2909333", "SBT", "SDOM", "SIGA", "SIL", "SKP", "SLAV", "SOLN", "SPAZ", "SPAZP",
    "SPOL", "SSPR", "STB", "STBP", "STEL", "STIL", "STOK", "TAJM", "TASK", "TEAL",
    "TEHN", "TEL", "TETE", "TIGA", "TIKV", "TKPR", "TKVS", "TNB", "TRDB", "TROZ",
    "TRPS", "TRUB", "TSMP", "TTK", "TTKO2", "TTKO3", "TURT", "UNI", "UNIPO2", "UNIPO3",
    "UNIPO4", "USJE", "VARG", "VENC", "VITA", "VROS", "VSC", "VTKS", "ZAS", "ZELE",
    "ZILU", "ZILUP", "ZKAR", "ZLRB", "ZPKO", "ZPOG", "ZSIL", "ZUS",
];

/// Fixed symbol used by the smoke-test run.
pub const SMOKE_TEST_SYMBOL: &str = "KORZ";
