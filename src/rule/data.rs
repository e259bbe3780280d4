use crate::rule::{RepairRule, RulePass, RuleTable, SuffixRule};

/// ---------------------------------------------------------------------------
///    Macros – one line per rule, everything else is derived
/// ---------------------------------------------------------------------------
///
/// `"ech" => "e", repair;` cuts `ech`, writes `e` back and runs the repair
/// rules. Without `=> ...` the replacement is empty; without `repair` the
/// repair rules are skipped.
macro_rules! suffix_rules {
    (min_root: $min_root:literal; $( $suffix:literal $(=> $replacement:literal)? $(, $repair:ident)? );* $(;)?) => {
        &[ $(
            SuffixRule::new(
                $suffix,
                $min_root,
                suffix_rules!(@replacement $($replacement)?),
                suffix_rules!(@repair $($repair)?),
            )
        ),* ]
    };
    (@replacement) => { "" };
    (@replacement $replacement:literal) => { $replacement };
    (@repair) => { false };
    (@repair repair) => { true };
}

macro_rules! repair_rules {
    ($( $pattern:literal => $replacement:literal );* $(;)?) => {
        &[ $( RepairRule::new($pattern, $replacement) ),* ]
    };
}

/// Merge two longest-first rule lists into one, keeping `base` ahead of
/// `extra` among equal suffix lengths.
const fn merge_rules<const N: usize>(base: &[SuffixRule], extra: &[SuffixRule]) -> [SuffixRule; N] {
    assert!(base.len() + extra.len() == N, "merged rule count mismatch");
    assert!(!base.is_empty(), "merging into an empty rule list");
    let mut out = [base[0]; N];
    let (mut i, mut j, mut k) = (0, 0, 0);
    while k < N {
        if j >= extra.len() || (i < base.len() && base[i].suffix_len() >= extra[j].suffix_len()) {
            out[k] = base[i];
            i += 1;
        } else {
            out[k] = extra[j];
            j += 1;
        }
        k += 1;
    }
    out
}

// ---------------------------------------------------------------------------
//    Palatalization repairs (shared by both tables)
// ---------------------------------------------------------------------------
static PALATALIZATION: &[RepairRule] = repair_rules! {
    "čtě" => "ck";
    "čti" => "ck";
    "čtí" => "ck";
    "ště" => "sk";
    "šti" => "sk";
    "ští" => "sk";
    "ci" => "k";
    "ce" => "k";
    "či" => "k";
    "če" => "k";
    "zi" => "h";
    "ze" => "h";
    "ži" => "h";
    "že" => "h";
};

// ---------------------------------------------------------------------------
//    Light: case and number endings, then possessives
// ---------------------------------------------------------------------------
const CASE: &[SuffixRule] = suffix_rules! { min_root: 3;
    "atech";
    "ětem" => "ě", repair;
    "atům";
    "ech" => "e", repair;
    "ich" => "i", repair;
    "ích" => "í", repair;
    "ého" => "é", repair;
    "ěmi" => "ě", repair;
    "emi" => "e", repair;
    "ému" => "é", repair;
    "ěte" => "ě", repair;
    "ěti" => "ě", repair;
    "iho" => "i", repair;
    "ího" => "í", repair;
    "ími" => "í", repair;
    "imu" => "i", repair;
    "ách";
    "ata";
    "aty";
    "ých";
    "ama";
    "ami";
    "ové";
    "ovi";
    "ými";
    "em" => "e", repair;
    "es", repair;
    "ém", repair;
    "ím", repair;
    "ům";
    "at";
    "ám";
    "os";
    "us";
    "ým";
    "mi";
    "ou";
    "e" => "e", repair;
    "i" => "i", repair;
    "í" => "í", repair;
    "ě" => "ě", repair;
    "u";
    "y";
    "ů";
    "a";
    "o";
    "á";
    "é";
    "ý";
};

static POSSESSIVE: &[SuffixRule] = suffix_rules! { min_root: 4;
    "ov";
    "ův";
    "in" => "i", repair;
};

pub static LIGHT: RuleTable = RuleTable {
    name: "light",
    passes: &[
        RulePass {
            name: "case",
            rules: CASE,
        },
        RulePass {
            name: "possessive",
            rules: POSSESSIVE,
        },
    ],
    repairs: PALATALIZATION,
};

// ---------------------------------------------------------------------------
//    Aggressive: Light's endings plus derivational morphology
// ---------------------------------------------------------------------------
// Aggressive also folds the neuter `-eti` ending; the rest is Light's case pass.
const AGGRESSIVE_CASE_ONLY: &[SuffixRule] = suffix_rules! { min_root: 3;
    "eti" => "e", repair;
};

static AGGRESSIVE_CASE: [SuffixRule; CASE.len() + AGGRESSIVE_CASE_ONLY.len()] =
    merge_rules(CASE, AGGRESSIVE_CASE_ONLY);

static COMPARATIVE: &[SuffixRule] = suffix_rules! { min_root: 3;
    "ejš" => "e", repair;
    "ějš" => "ě", repair;
};

static DIMINUTIVE: &[SuffixRule] = suffix_rules! { min_root: 3;
    "oušek";
    "eček" => "e", repair;
    "éček" => "é", repair;
    "iček" => "i", repair;
    "íček" => "í", repair;
    "enek" => "e", repair;
    "ének" => "é", repair;
    "inek" => "i", repair;
    "ínek" => "í", repair;
    "áček";
    "aček";
    "oček";
    "uček";
    "anek";
    "onek";
    "unek";
    "ánek";
    "ečk" => "e", repair;
    "éčk" => "é", repair;
    "ičk" => "i", repair;
    "íčk" => "í", repair;
    "enk" => "e", repair;
    "énk" => "é", repair;
    "ink" => "i", repair;
    "ínk" => "í", repair;
    "áčk";
    "ačk";
    "očk";
    "učk";
    "ank";
    "onk";
    "unk";
    "átk";
    "ánk";
    "ušk";
    "ek" => "e", repair;
    "ék" => "é", repair;
    "ík" => "í", repair;
    "ik" => "i", repair;
    "ák";
    "ak";
    "ok";
    "uk";
    "k";
};

static AUGMENTATIVE: &[SuffixRule] = suffix_rules! { min_root: 3;
    "ajzn";
    "izn" => "i", repair;
    "isk" => "i", repair;
    "ák";
};

static DERIVATIONAL: &[SuffixRule] = suffix_rules! { min_root: 3;
    "obinec";
    "ionář" => "i", repair;
    "ovisk";
    "ovstv";
    "ovišt";
    "ovník";
    "ásek";
    "loun";
    "nost";
    "teln";
    "ovec";
    "ovík";
    "ovtv";
    "ovin";
    "štin";
    "enic" => "e", repair;
    "inec" => "i", repair;
    "itel" => "i", repair;
    "árn";
    "ěnk" => "ě", repair;
    "ián" => "i", repair;
    "ist" => "i", repair;
    "isk" => "i", repair;
    "išt" => "i", repair;
    "itb" => "i", repair;
    "írn" => "í", repair;
    "och";
    "ost";
    "ovn";
    "oun";
    "out";
    "ouš";
    "ušk";
    "kyn";
    "čan";
    "kář";
    "néř";
    "ník";
    "ctv";
    "stv";
    "áč";
    "ač";
    "án";
    "an";
    "ář";
    "as";
    "ec" => "e", repair;
    "en" => "e", repair;
    "ěn" => "ě", repair;
    "éř" => "é", repair;
    "íř" => "í", repair;
    "ic" => "i", repair;
    "in" => "i", repair;
    "ín" => "í", repair;
    "it" => "i", repair;
    "iv" => "i", repair;
    "ob";
    "ot";
    "ov";
    "oň";
    "ul";
    "yn";
    "čk";
    "čn";
    "dl";
    "nk";
    "tv";
    "tk";
    "vk";
    "c";
    "č";
    "k";
    "l";
    "n";
    "t";
};

pub static AGGRESSIVE: RuleTable = RuleTable {
    name: "aggressive",
    passes: &[
        RulePass {
            name: "case",
            rules: &AGGRESSIVE_CASE,
        },
        RulePass {
            name: "possessive",
            rules: POSSESSIVE,
        },
        RulePass {
            name: "comparative",
            rules: COMPARATIVE,
        },
        RulePass {
            name: "diminutive",
            rules: DIMINUTIVE,
        },
        RulePass {
            name: "augmentative",
            rules: AUGMENTATIVE,
        },
        RulePass {
            name: "derivational",
            rules: DERIVATIONAL,
        },
    ],
    repairs: PALATALIZATION,
};
