//! Hungarian stemmer
//!
//! Strips, in order: the instrumental case, the general case endings, two groups of
//! special case endings, the factive, owner markers (owned, singular owner, plural
//! owner) and finally the plural. A suffix is only removed when it starts inside R1.
//!
//! R1 is the region after the first non-vowel following a vowel; for words that
//! start with a vowel it begins after the first consonant, where the digraphs
//! `cs dzs gy ly ny sz ty zs` count as a single consonant.
//!
//! Vowel-final stems are restored where an ending lengthened them (`almát` loses
//! `t` to give `almá`, then `á` becomes `a` if the case step applied), and an
//! instrumental or factive ending that assimilated into a doubled consonant
//! (`kézzel`, `lánnyal`) has the double collapsed again.
//!
//! The long double-acute vowels are spelled `õ` (U+00F5) and `û` (U+00FB) in
//! every table and in the vowel set, as in the Latin-2 era rule data. Text using
//! the standard `ő` (U+0151) and `ű` (U+0171) is not recognised: `kertjéből` and
//! `kővé` come back unchanged. Map those characters to `õ`/`û` before stemming,
//! or use `rust-stemmers`' Hungarian algorithm, if that matters.

use super::among::{Among, AmongTable};
use super::env::SnowballEnv;
use super::grouping::GroupingSet;
use super::program::{Action, Outcome, Rule, RuleProgram, Step, SuffixRule};
use crate::error::Result;

/// Per-word state of the Hungarian program.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Start of R1 as a byte offset; equal to the word length when R1 is empty
    pub p1: usize,
}

/// a e i o u á é í ó õ ö ú û ü
static VOWELS: GroupingSet = GroupingSet::new(
    &[17, 65, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 17, 52, 14],
    'a',
    'ü',
);

static DIGRAPHS: [Among<Regions>; 8] = [
    Among::new("cs", -1, 1),
    Among::new("dzs", -1, 1),
    Among::new("gy", -1, 1),
    Among::new("ly", -1, 1),
    Among::new("ny", -1, 1),
    Among::new("sz", -1, 1),
    Among::new("ty", -1, 1),
    Among::new("zs", -1, 1),
];
static DIGRAPHS_TABLE: AmongTable<Regions> = AmongTable::forward("digraphs", &DIGRAPHS);

static V_ENDINGS: [Among<Regions>; 2] = [
    Among::new("á", -1, 1),
    Among::new("é", -1, 2),
];
static V_ENDINGS_TABLE: AmongTable<Regions> = AmongTable::backward("v_ending", &V_ENDINGS);

static DOUBLES: [Among<Regions>; 23] = [
    Among::new("bb", -1, 1),
    Among::new("cc", -1, 1),
    Among::new("dd", -1, 1),
    Among::new("ff", -1, 1),
    Among::new("gg", -1, 1),
    Among::new("jj", -1, 1),
    Among::new("kk", -1, 1),
    Among::new("ll", -1, 1),
    Among::new("mm", -1, 1),
    Among::new("nn", -1, 1),
    Among::new("pp", -1, 1),
    Among::new("rr", -1, 1),
    Among::new("ccs", -1, 1),
    Among::new("ss", -1, 1),
    Among::new("zzs", -1, 1),
    Among::new("tt", -1, 1),
    Among::new("vv", -1, 1),
    Among::new("ggy", -1, 1),
    Among::new("lly", -1, 1),
    Among::new("nny", -1, 1),
    Among::new("tty", -1, 1),
    Among::new("ssz", -1, 1),
    Among::new("zz", -1, 1),
];
static DOUBLES_TABLE: AmongTable<Regions> = AmongTable::backward("doubles", &DOUBLES);

static INSTRUMENTAL: [Among<Regions>; 2] = [
    Among::new("al", -1, 1),
    Among::new("el", -1, 2),
];
static INSTRUMENTAL_TABLE: AmongTable<Regions> = AmongTable::backward("instrum", &INSTRUMENTAL);

static CASES: [Among<Regions>; 44] = [
    Among::new("ba", -1, 1),
    Among::new("ra", -1, 1),
    Among::new("be", -1, 1),
    Among::new("re", -1, 1),
    Among::new("ig", -1, 1),
    Among::new("nak", -1, 1),
    Among::new("nek", -1, 1),
    Among::new("val", -1, 1),
    Among::new("vel", -1, 1),
    Among::new("ul", -1, 1),
    Among::new("nál", -1, 1),
    Among::new("nél", -1, 1),
    Among::new("ból", -1, 1),
    Among::new("ról", -1, 1),
    Among::new("tól", -1, 1),
    Among::new("bõl", -1, 1),
    Among::new("rõl", -1, 1),
    Among::new("tõl", -1, 1),
    Among::new("ül", -1, 1),
    Among::new("n", -1, 1),
    Among::new("an", 19, 1),
    Among::new("ban", 20, 1),
    Among::new("en", 19, 1),
    Among::new("ben", 22, 1),
    Among::new("képpen", 22, 1),
    Among::new("on", 19, 1),
    Among::new("ön", 19, 1),
    Among::new("képp", -1, 1),
    Among::new("kor", -1, 1),
    Among::new("t", -1, 1),
    Among::new("at", 29, 1),
    Among::new("et", 29, 1),
    Among::new("ként", 29, 1),
    Among::new("anként", 32, 1),
    Among::new("enként", 32, 1),
    Among::new("onként", 32, 1),
    Among::new("ot", 29, 1),
    Among::new("ért", 29, 1),
    Among::new("öt", 29, 1),
    Among::new("hez", -1, 1),
    Among::new("hoz", -1, 1),
    Among::new("höz", -1, 1),
    Among::new("vá", -1, 1),
    Among::new("vé", -1, 1),
];
static CASES_TABLE: AmongTable<Regions> = AmongTable::backward("case", &CASES);

static SPECIAL_CASES: [Among<Regions>; 3] = [
    Among::new("án", -1, 2),
    Among::new("én", -1, 1),
    Among::new("ánként", -1, 3),
];
static SPECIAL_CASES_TABLE: AmongTable<Regions> =
    AmongTable::backward("case_special", &SPECIAL_CASES);

static OTHER_CASES: [Among<Regions>; 6] = [
    Among::new("stul", -1, 2),
    Among::new("astul", 0, 1),
    Among::new("ástul", 0, 3),
    Among::new("stül", -1, 2),
    Among::new("estül", 3, 1),
    Among::new("éstül", 3, 4),
];
static OTHER_CASES_TABLE: AmongTable<Regions> = AmongTable::backward("case_other", &OTHER_CASES);

static FACTIVE: [Among<Regions>; 2] = [
    Among::new("á", -1, 1),
    Among::new("é", -1, 2),
];
static FACTIVE_TABLE: AmongTable<Regions> = AmongTable::backward("factive", &FACTIVE);

static PLURALS: [Among<Regions>; 7] = [
    Among::new("k", -1, 7),
    Among::new("ak", 0, 4),
    Among::new("ek", 0, 6),
    Among::new("ok", 0, 5),
    Among::new("ák", 0, 1),
    Among::new("ék", 0, 2),
    Among::new("ök", 0, 3),
];
static PLURALS_TABLE: AmongTable<Regions> = AmongTable::backward("plural", &PLURALS);

static OWNED: [Among<Regions>; 12] = [
    Among::new("éi", -1, 7),
    Among::new("áéi", 0, 6),
    Among::new("ééi", 0, 5),
    Among::new("é", -1, 9),
    Among::new("ké", 3, 4),
    Among::new("aké", 4, 1),
    Among::new("eké", 4, 1),
    Among::new("oké", 4, 1),
    Among::new("áké", 4, 3),
    Among::new("éké", 4, 2),
    Among::new("öké", 4, 1),
    Among::new("éé", 3, 8),
];
static OWNED_TABLE: AmongTable<Regions> = AmongTable::backward("owned", &OWNED);

static SINGULAR_OWNER: [Among<Regions>; 31] = [
    Among::new("a", -1, 18),
    Among::new("ja", 0, 17),
    Among::new("d", -1, 16),
    Among::new("ad", 2, 13),
    Among::new("ed", 2, 13),
    Among::new("od", 2, 13),
    Among::new("ád", 2, 14),
    Among::new("éd", 2, 15),
    Among::new("öd", 2, 13),
    Among::new("e", -1, 18),
    Among::new("je", 9, 17),
    Among::new("nk", -1, 4),
    Among::new("unk", 11, 1),
    Among::new("ánk", 11, 2),
    Among::new("énk", 11, 3),
    Among::new("ünk", 11, 1),
    Among::new("uk", -1, 8),
    Among::new("juk", 16, 7),
    Among::new("ájuk", 17, 5),
    Among::new("ük", -1, 8),
    Among::new("jük", 19, 7),
    Among::new("éjük", 20, 6),
    Among::new("m", -1, 12),
    Among::new("am", 22, 9),
    Among::new("em", 22, 9),
    Among::new("om", 22, 9),
    Among::new("ám", 22, 10),
    Among::new("ém", 22, 11),
    Among::new("o", -1, 18),
    Among::new("á", -1, 19),
    Among::new("é", -1, 20),
];
static SINGULAR_OWNER_TABLE: AmongTable<Regions> =
    AmongTable::backward("sing_owner", &SINGULAR_OWNER);

static PLURAL_OWNER: [Among<Regions>; 42] = [
    Among::new("id", -1, 10),
    Among::new("aid", 0, 9),
    Among::new("jaid", 1, 6),
    Among::new("eid", 0, 9),
    Among::new("jeid", 3, 6),
    Among::new("áid", 0, 7),
    Among::new("éid", 0, 8),
    Among::new("i", -1, 15),
    Among::new("ai", 7, 14),
    Among::new("jai", 8, 11),
    Among::new("ei", 7, 14),
    Among::new("jei", 10, 11),
    Among::new("ái", 7, 12),
    Among::new("éi", 7, 13),
    Among::new("itek", -1, 24),
    Among::new("eitek", 14, 21),
    Among::new("jeitek", 15, 20),
    Among::new("éitek", 14, 23),
    Among::new("ik", -1, 29),
    Among::new("aik", 18, 26),
    Among::new("jaik", 19, 25),
    Among::new("eik", 18, 26),
    Among::new("jeik", 21, 25),
    Among::new("áik", 18, 27),
    Among::new("éik", 18, 28),
    Among::new("ink", -1, 20),
    Among::new("aink", 25, 17),
    Among::new("jaink", 26, 16),
    Among::new("eink", 25, 17),
    Among::new("jeink", 28, 16),
    Among::new("áink", 25, 18),
    Among::new("éink", 25, 19),
    Among::new("aitok", -1, 21),
    Among::new("jaitok", 32, 20),
    Among::new("áitok", -1, 22),
    Among::new("im", -1, 5),
    Among::new("aim", 35, 4),
    Among::new("jaim", 36, 1),
    Among::new("eim", 35, 4),
    Among::new("jeim", 38, 1),
    Among::new("áim", 35, 2),
    Among::new("éim", 35, 3),
];
static PLURAL_OWNER_TABLE: AmongTable<Regions> = AmongTable::backward("plur_owner", &PLURAL_OWNER);

fn mark_regions(env: &mut SnowballEnv, ctx: &mut Regions) -> Result<bool> {
    ctx.p1 = env.limit();
    let start = env.cursor();
    if skip_initial_vowel_and_consonant(env, ctx)? {
        ctx.p1 = env.cursor();
        return Ok(true);
    }
    env.set_cursor(start);

    if !env.out_grouping(&VOWELS) {
        return Ok(false);
    }
    while !env.in_grouping(&VOWELS) {
        if !env.next() {
            return Ok(false);
        }
    }
    ctx.p1 = env.cursor();
    Ok(true)
}

/// Vowel, any further vowels, then one consonant or digraph.
fn skip_initial_vowel_and_consonant(env: &mut SnowballEnv, ctx: &mut Regions) -> Result<bool> {
    if !env.in_grouping(&VOWELS) {
        return Ok(false);
    }
    loop {
        let at = env.cursor();
        if env.out_grouping(&VOWELS) {
            env.set_cursor(at);
            break;
        }
        if !env.next() {
            return Ok(false);
        }
    }
    if env.find_among(&DIGRAPHS_TABLE, ctx)? == 0 && !env.next() {
        return Ok(false);
    }
    Ok(true)
}

fn r1(env: &SnowballEnv, ctx: &Regions) -> bool {
    ctx.p1 <= env.cursor()
}

const DEL: Action<Regions> = Action::Delete;
const TO_A: Action<Regions> = Action::Replace("a");
const TO_E: Action<Regions> = Action::Replace("e");

/// Lengthened stem vowel left behind by a case ending
static V_ENDING: SuffixRule<Regions> = SuffixRule {
    table: &V_ENDINGS_TABLE,
    region: r1,
    outcome: Outcome::ByTag(&[TO_A, TO_E]),
};

static STEPS: [Step<Regions>; 9] = [
    Step {
        name: "instrum",
        rule: Rule::Suffix(SuffixRule {
            table: &INSTRUMENTAL_TABLE,
            region: r1,
            outcome: Outcome::Always(Action::Undouble),
        }),
    },
    Step {
        name: "case",
        rule: Rule::Suffix(SuffixRule {
            table: &CASES_TABLE,
            region: r1,
            outcome: Outcome::Always(Action::DeleteThen(&V_ENDING)),
        }),
    },
    Step {
        name: "case_special",
        rule: Rule::Suffix(SuffixRule {
            table: &SPECIAL_CASES_TABLE,
            region: r1,
            outcome: Outcome::ByTag(&[TO_E, TO_A, TO_A]),
        }),
    },
    Step {
        name: "case_other",
        rule: Rule::Suffix(SuffixRule {
            table: &OTHER_CASES_TABLE,
            region: r1,
            outcome: Outcome::ByTag(&[DEL, DEL, TO_A, TO_E]),
        }),
    },
    Step {
        name: "factive",
        rule: Rule::Suffix(SuffixRule {
            table: &FACTIVE_TABLE,
            region: r1,
            outcome: Outcome::Always(Action::Undouble),
        }),
    },
    Step {
        name: "owned",
        rule: Rule::Suffix(SuffixRule {
            table: &OWNED_TABLE,
            region: r1,
            outcome: Outcome::ByTag(&[DEL, TO_E, TO_A, DEL, TO_E, TO_A, DEL, TO_E, DEL]),
        }),
    },
    Step {
        name: "sing_owner",
        rule: Rule::Suffix(SuffixRule {
            table: &SINGULAR_OWNER_TABLE,
            region: r1,
            outcome: Outcome::ByTag(&[
                DEL, TO_A, TO_E, DEL, TO_A, TO_E, DEL, DEL, DEL, TO_A,
                TO_E, DEL, DEL, TO_A, TO_E, DEL, DEL, DEL, TO_A, TO_E,
            ]),
        }),
    },
    Step {
        name: "plur_owner",
        rule: Rule::Suffix(SuffixRule {
            table: &PLURAL_OWNER_TABLE,
            region: r1,
            outcome: Outcome::ByTag(&[
                DEL, TO_A, TO_E, DEL, DEL, DEL, TO_A, TO_E, DEL, DEL,
                DEL, TO_A, TO_E, DEL, DEL, DEL, DEL, TO_A, TO_E, DEL,
                DEL, TO_A, TO_E, DEL, DEL, DEL, TO_A, TO_E, DEL,
            ]),
        }),
    },
    Step {
        name: "plural",
        rule: Rule::Suffix(SuffixRule {
            table: &PLURALS_TABLE,
            region: r1,
            outcome: Outcome::ByTag(&[TO_A, TO_E, DEL, DEL, DEL, DEL, DEL]),
        }),
    },
];

pub static HUNGARIAN: RuleProgram<Regions> = RuleProgram {
    name: "hungarian",
    mark_regions,
    doubles: Some(&DOUBLES_TABLE),
    tables: &[
        &DIGRAPHS_TABLE,
        &V_ENDINGS_TABLE,
        &DOUBLES_TABLE,
        &INSTRUMENTAL_TABLE,
        &CASES_TABLE,
        &SPECIAL_CASES_TABLE,
        &OTHER_CASES_TABLE,
        &FACTIVE_TABLE,
        &PLURALS_TABLE,
        &OWNED_TABLE,
        &SINGULAR_OWNER_TABLE,
        &PLURAL_OWNER_TABLE,
    ],
    steps: &STEPS,
};

/// The Hungarian rule program.
pub fn program() -> &'static RuleProgram<Regions> {
    &HUNGARIAN
}
