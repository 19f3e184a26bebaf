// The Turkish grammar graph.
//
// Covers the noun paradigm with possession, case, compound and
// last-vowel-drop sub-paradigms and the diminutive / -ness / agent /
// with / without derivations; personal and quantitive pronouns including
// the rewritten `ban/san` roots; and the verb paradigm with imperative,
// past, narrative, future, aorist, progressive, negation, infinitive,
// passive, the irregular `de/ye` roots and the copula `imek`.
//
// State naming follows a convention: `_S` non-terminal, `_ST` terminal.
// Templates use the surface token language of [`super::template`].

use std::sync::Arc;

use hashbrown::HashMap;
use kelime_core::attributes::{AttributeSet, PhoneticAttribute, RootAttribute};
use kelime_core::pos::{PrimaryPos, SecondaryPos};

use crate::lexicon::DictionaryItem;

use super::conditions::Condition;
use super::{Morpheme, MorphotacticsGraph, StateId};

/// The grammar: the graph plus the root states stem generation routes into.
pub struct TurkishMorphotactics {
    graph: MorphotacticsGraph,
    morphemes: HashMap<String, Arc<Morpheme>>,

    pub noun_s: StateId,
    pub noun_compound_root_s: StateId,
    pub noun_proper_s: StateId,
    pub noun_last_vowel_drop_root_s: StateId,
    pub adjective_root_st: StateId,
    pub adj_last_vowel_drop_root_s: StateId,
    pub pron_pers_s: StateId,
    pub pron_pers_mod_s: StateId,
    pub pron_quant_s: StateId,
    pub pron_quant_modified_s: StateId,
    pub verb_root_s: StateId,
    pub verb_root_vowel_drop_s: StateId,
    pub verb_last_vowel_drop_unmod_root_s: StateId,
    pub verb_last_vowel_drop_mod_root_s: StateId,
    pub v_de_ye_root_s: StateId,
    pub imek_root_s: StateId,

    item_root_states: HashMap<&'static str, StateId>,
}

impl Default for TurkishMorphotactics {
    fn default() -> Self {
        Self::new()
    }
}

impl TurkishMorphotactics {
    pub fn new() -> Self {
        use Condition as C;
        use PhoneticAttribute as Pa;
        use RootAttribute as Ra;

        let mut g = MorphotacticsGraph::new();

        // -- morphemes --

        let noun = Morpheme::with_pos("Noun", "Noun", PrimaryPos::Noun);
        let adj = Morpheme::with_pos("Adjective", "Adj", PrimaryPos::Adjective);
        let verb = Morpheme::with_pos("Verb", "Verb", PrimaryPos::Verb);
        let pron = Morpheme::with_pos("Pronoun", "Pron", PrimaryPos::Pronoun);

        let a1sg = Morpheme::new("FirstPersonSingular", "A1sg");
        let a2sg = Morpheme::new("SecondPersonSingular", "A2sg");
        let a3sg = Morpheme::new("ThirdPersonSingular", "A3sg");
        let a1pl = Morpheme::new("FirstPersonPlural", "A1pl");
        let a2pl = Morpheme::new("SecondPersonPlural", "A2pl");
        let a3pl = Morpheme::new("ThirdPersonPlural", "A3pl");

        let pnon = Morpheme::new("NoPossession", "Pnon");
        let p1sg = Morpheme::new("FirstPersonSingularPossessive", "P1sg");
        let p2sg = Morpheme::new("SecondPersonSingularPossessive", "P2sg");
        let p3sg = Morpheme::new("ThirdPersonSingularPossessive", "P3sg");
        let p1pl = Morpheme::new("FirstPersonPluralPossessive", "P1pl");
        let p2pl = Morpheme::new("SecondPersonPluralPossessive", "P2pl");
        let p3pl = Morpheme::new("ThirdPersonPluralPossessive", "P3pl");

        let nom = Morpheme::new("Nominal", "Nom");
        let dat = Morpheme::new("Dative", "Dat");
        let acc = Morpheme::new("Accusative", "Acc");
        let abl = Morpheme::new("Ablative", "Abl");
        let loc = Morpheme::new("Locative", "Loc");
        let ins = Morpheme::new("Instrumental", "Ins");
        let r#gen = Morpheme::new("Genitive", "Gen");
        let equ = Morpheme::new("Equ", "Equ");

        let dim = Morpheme::derivational("Diminutive", "Dim");
        let ness = Morpheme::derivational("Ness", "Ness");
        let agt = Morpheme::derivational("Agentive", "Agt");
        let with = Morpheme::derivational("With", "With");
        let without = Morpheme::derivational("Without", "Without");
        let zero = Morpheme::derivational("Zero", "Zero");
        let inf1 = Morpheme::derivational("Infinitive1", "Inf1");
        let pass = Morpheme::derivational("Passive", "Pass");

        let neg = Morpheme::new("Negative", "Neg");
        let past = Morpheme::new("PastTense", "Past");
        let narr = Morpheme::new("NarrativeTense", "Narr");
        let cond = Morpheme::new("Condition", "Cond");
        let fut = Morpheme::new("Future", "Fut");
        let aor = Morpheme::new("Aorist", "Aor");
        let prog1 = Morpheme::new("Progressive1", "Prog1");
        let imp = Morpheme::new("Imperative", "Imp");

        // -- noun states --

        let noun_s = g.non_terminal("noun_S", &noun);
        let noun_compound_root_s = g.non_terminal("nounCompoundRoot_S", &noun);
        let noun_proper_s = g.non_terminal("nounProper_S", &noun);
        let noun_inf1_root_s = g.non_terminal("nounInf1Root_S", &noun);
        let noun_lvd_root_s = g.non_terminal("nounLastVowelDropRoot_S", &noun);

        let a3sg_s = g.non_terminal("a3sg_S", &a3sg);
        let a3sg_compound_s = g.non_terminal("a3sgCompound_S", &a3sg);
        let a3sg_inf1_s = g.non_terminal("a3sgInf1_S", &a3sg);
        let a3sg_lvd_s = g.non_terminal("a3sgLastVowelDrop_S", &a3sg);
        let a3pl_s = g.non_terminal("a3pl_S", &a3pl);
        let a3pl_compound_s = g.non_terminal("a3plCompound_S", &a3pl);
        let a3pl_compound2_s = g.non_terminal("a3plCompound2_S", &a3pl);
        let a3pl_lvd_s = g.non_terminal("a3plLastVowelDrop_S", &a3pl);

        let pnon_s = g.non_terminal("pnon_S", &pnon);
        let pnon_compound_s = g.non_terminal("pnonCompound_S", &pnon);
        let pnon_compound2_s = g.non_terminal("pnonCompound2_S", &pnon);
        let pnon_inf1_s = g.non_terminal("pnonInf1_S", &pnon);
        let pnon_lvd_s = g.non_terminal("pnonLastVowelDrop_S", &pnon);
        let p1sg_s = g.non_terminal("p1sg_S", &p1sg);
        let p2sg_s = g.non_terminal("p2sg_S", &p2sg);
        let p3sg_s = g.non_terminal("p3sg_S", &p3sg);
        let p1pl_s = g.non_terminal("p1pl_S", &p1pl);
        let p2pl_s = g.non_terminal("p2pl_S", &p2pl);
        let p3pl_s = g.non_terminal("p3pl_S", &p3pl);

        let nom_st = g.terminal("nom_ST", &nom);
        let nom_s = g.non_terminal("nom_S", &nom);
        let dat_st = g.terminal("dat_ST", &dat);
        let abl_st = g.terminal("abl_ST", &abl);
        let loc_st = g.terminal("loc_ST", &loc);
        let acc_st = g.terminal("acc_ST", &acc);
        let gen_st = g.terminal("gen_ST", &r#gen);
        let ins_st = g.terminal("ins_ST", &ins);
        let equ_st = g.terminal("equ_ST", &equ);

        let dim_s = g.derivative("dim_S", &dim);
        let ness_s = g.derivative("ness_S", &ness);
        let agt_s = g.derivative("agt_S", &agt);
        let with_s = g.derivative("with_S", &with);
        let without_s = g.derivative("without_S", &without);

        let adjective_root_st = g.terminal("adjectiveRoot_ST", &adj);
        let adj_lvd_root_s = g.non_terminal("adjLastVowelDropRoot_S", &adj);
        let adj_zero_deriv_s = g.derivative("adjZeroDeriv_S", &zero);
        let zero_lvd_s = g.derivative("zeroLastVowelDrop_S", &zero);

        // -- condition shorthands --

        let contains_none = |morphemes: &[&Arc<Morpheme>]| {
            C::ContainsMorpheme(morphemes.iter().map(|m| Arc::clone(m)).collect()).not()
        };
        let has_no_surface = || C::HasAnySuffixSurface.not();
        let group_empty = || C::NoSurfaceAfterDerivation;
        let possession =
            || C::not_have_root_attribute(Ra::FamilyMember)
                .and(C::SecondaryPosIs(SecondaryPos::Abbreviation).not());

        // -- noun inflection --

        g.add_empty(noun_s, a3sg_s, Some(C::not_have_root_attribute(Ra::ImplicitPlural)));
        g.add(
            noun_s,
            a3pl_s,
            "lAr",
            Some(
                C::not_have_root_attribute(Ra::ImplicitPlural)
                    .and(C::not_have_root_attribute(Ra::CompoundP3sg)),
            ),
        );
        g.add_empty(noun_s, a3pl_s, Some(C::has_root_attribute(Ra::ImplicitPlural)));

        // bare compound roots: `zeytinyağ`
        g.add_empty(
            noun_compound_root_s,
            a3sg_compound_s,
            Some(C::has_root_attribute(Ra::CompoundP3sgRoot)),
        );
        g.add(a3sg_compound_s, p3pl_s, "lArI", None);
        g.add_empty(a3sg_compound_s, pnon_compound_s, None);
        g.add_empty(pnon_compound_s, nom_s, None);
        g.add(nom_s, with_s, "lI", Some(contains_none(&[&with, &without])));
        g.add(nom_s, without_s, "sIz", Some(contains_none(&[&with, &without])));
        g.add(nom_s, agt_s, ">cI", Some(contains_none(&[&agt])));
        g.add(nom_s, ness_s, "lI~k", Some(contains_none(&[&ness])));
        g.add(nom_s, ness_s, "lI!ğ", Some(contains_none(&[&ness])));
        g.add(nom_s, dim_s, ">cI~k", Some(has_no_surface()));
        g.add(nom_s, dim_s, ">cI!ğ", Some(has_no_surface()));

        g.add(
            noun_compound_root_s,
            a3pl_compound_s,
            "lAr",
            Some(C::has_root_attribute(Ra::CompoundP3sgRoot)),
        );
        g.add(
            noun_compound_root_s,
            a3pl_compound2_s,
            "lArI",
            Some(C::has_root_attribute(Ra::CompoundP3sgRoot)),
        );
        g.add(a3pl_compound_s, p3sg_s, "I", None);
        g.add(a3pl_compound_s, p2sg_s, "In", None);
        g.add(a3pl_compound_s, p1sg_s, "Im", None);
        g.add(a3pl_compound_s, p1pl_s, "ImIz", None);
        g.add(a3pl_compound_s, p2pl_s, "InIz", None);
        g.add(a3pl_compound_s, p3pl_s, "I", None);
        g.add_empty(a3pl_compound2_s, pnon_compound2_s, None);
        g.add_empty(pnon_compound2_s, nom_st, None);

        g.add_empty(a3sg_s, pnon_s, Some(C::not_have_root_attribute(Ra::FamilyMember)));
        g.add(a3sg_s, p1sg_s, "Im", Some(possession()));
        g.add(a3sg_s, p2sg_s, "In", Some(possession()));
        g.add(a3sg_s, p3sg_s, "+sI", Some(possession()));
        // `zeytinyağı` is already possessed
        g.add_empty(a3sg_s, p3sg_s, Some(C::has_root_attribute(Ra::CompoundP3sg)));
        g.add(a3sg_s, p1pl_s, "ImIz", Some(possession()));
        g.add(a3sg_s, p2pl_s, "InIz", Some(possession()));
        g.add(a3sg_s, p3pl_s, "lArI", Some(possession()));

        g.add_empty(a3pl_s, pnon_s, Some(C::not_have_root_attribute(Ra::FamilyMember)));
        g.add(a3pl_s, p1sg_s, "Im", Some(possession()));
        g.add(a3pl_s, p2sg_s, "In", Some(possession()));
        g.add_empty(a3pl_s, p1sg_s, Some(C::has_root_attribute(Ra::ImplicitP1sg)));
        g.add_empty(a3pl_s, p2sg_s, Some(C::has_root_attribute(Ra::ImplicitP2sg)));
        g.add(a3pl_s, p3sg_s, "I", Some(possession()));
        g.add(a3pl_s, p1pl_s, "ImIz", Some(possession()));
        g.add(a3pl_s, p2pl_s, "InIz", Some(possession()));
        g.add(a3pl_s, p3pl_s, "I", Some(possession()));

        let not_compound = || C::not_have_root_attribute(Ra::CompoundP3sg);
        g.add_empty(pnon_s, nom_st, Some(C::not_have_root_attribute(Ra::FamilyMember)));
        g.add(pnon_s, dat_st, "+yA", Some(not_compound()));
        g.add(pnon_s, abl_st, ">dAn", Some(not_compound()));
        g.add(pnon_s, loc_st, ">dA", Some(not_compound()));
        g.add(pnon_s, acc_st, "+yI", Some(not_compound()));
        g.add(pnon_s, gen_st, "+nIn", None);
        g.add(pnon_s, equ_st, ">cA", Some(not_compound()));
        g.add(pnon_s, ins_st, "+ylA", None);
        // compound heads take the buffer consonant: `zeytinyağına`
        let compound = || C::has_root_attribute(Ra::CompoundP3sg);
        g.add(pnon_s, dat_st, "+nA", Some(compound()));
        g.add(pnon_s, abl_st, "+ndAn", Some(compound()));
        g.add(pnon_s, loc_st, "+ndA", Some(compound()));
        g.add(pnon_s, equ_st, "+ncA", Some(compound()));
        g.add(pnon_s, acc_st, "+nI", Some(compound()));
        g.add_empty(pnon_s, dat_st, Some(C::has_root_attribute(Ra::ImplicitDative)));

        for p in [p1sg_s, p2sg_s, p1pl_s, p2pl_s] {
            g.add_empty(p, nom_st, None);
            g.add(p, dat_st, "A", None);
            g.add(p, loc_st, "dA", None);
            g.add(p, abl_st, "dAn", None);
            g.add(p, ins_st, "lA", None);
            g.add(p, gen_st, "In", None);
            g.add(p, equ_st, "cA", None);
            g.add(p, acc_st, "I", None);
        }
        g.add_empty(p3sg_s, nom_st, None);
        g.add(p3sg_s, dat_st, "nA", None);
        g.add(p3sg_s, loc_st, "ndA", None);
        g.add(p3sg_s, abl_st, "ndAn", None);
        g.add(p3sg_s, ins_st, "ylA", None);
        g.add(p3sg_s, gen_st, "nIn", None);
        g.add(p3sg_s, equ_st, "ncA", None);
        g.add(p3sg_s, acc_st, "nI", None);
        g.add_empty(p3pl_s, nom_st, None);
        g.add(p3pl_s, dat_st, "nA", None);
        g.add(p3pl_s, loc_st, "ndA", None);
        g.add(p3pl_s, abl_st, "ndAn", None);
        g.add(p3pl_s, ins_st, "ylA", None);
        g.add(p3pl_s, gen_st, "nIn", None);
        g.add(p3pl_s, equ_st, "+ncA", None);
        g.add(p3pl_s, acc_st, "nI", None);

        // -- noun derivations --

        g.add(nom_st, dim_s, ">cI~k", Some(has_no_surface()));
        g.add(nom_st, dim_s, ">cI!ğ", Some(has_no_surface()));
        g.add(nom_st, dim_s, "cAğIz", Some(has_no_surface()));
        g.add_empty(dim_s, noun_s, None);

        g.add(nom_st, ness_s, "lI~k", Some(group_empty().and(contains_none(&[&ness]))));
        g.add(nom_st, ness_s, "lI!ğ", Some(group_empty().and(contains_none(&[&ness]))));
        g.add_empty(ness_s, noun_s, None);

        g.add(nom_st, agt_s, ">cI", Some(group_empty().and(contains_none(&[&adj, &agt]))));
        g.add_empty(agt_s, noun_s, None);

        g.add(nom_st, with_s, "lI", Some(group_empty().and(contains_none(&[&with, &without]))));
        g.add(
            nom_st,
            without_s,
            "sIz",
            Some(group_empty().and(contains_none(&[&with, &without, &inf1]))),
        );
        g.add_empty(with_s, adjective_root_st, None);
        g.add_empty(without_s, adjective_root_st, None);

        // adjectives feed the noun paradigm through a zero derivation when
        // there is input left: `güzel+lik`, `güzel+e`
        g.add_empty(adjective_root_st, adj_zero_deriv_s, Some(C::HasTail));
        g.add_empty(adj_zero_deriv_s, noun_s, None);

        // the infinitive only inflects for a reduced case set
        g.add_empty(noun_inf1_root_s, a3sg_inf1_s, None);
        g.add_empty(a3sg_inf1_s, pnon_inf1_s, None);
        g.add_empty(pnon_inf1_s, nom_st, None);
        g.add(pnon_inf1_s, abl_st, "tAn", None);
        g.add(pnon_inf1_s, loc_st, "tA", None);
        g.add(pnon_inf1_s, ins_st, "lA", None);

        // vowel-dropping place words: `içerde`, `içerden`
        g.add_empty(noun_lvd_root_s, a3sg_lvd_s, None);
        g.add(noun_lvd_root_s, a3pl_lvd_s, "lAr", None);
        g.add_empty(a3sg_lvd_s, pnon_lvd_s, None);
        g.add_empty(a3pl_lvd_s, pnon_lvd_s, None);
        g.add(pnon_lvd_s, loc_st, ">dA", None);
        g.add(pnon_lvd_s, abl_st, ">dAn", None);
        g.add_empty(adj_lvd_root_s, zero_lvd_s, None);
        g.add_empty(zero_lvd_s, noun_lvd_root_s, None);

        // written-form proper nouns take no possessives
        g.add_empty(noun_proper_s, a3sg_s, None);
        g.add(noun_proper_s, a3pl_s, "lAr", None);

        // -- pronoun states --

        let pron_pers_s = g.non_terminal("pronPers_S", &pron);
        let pron_pers_mod_s = g.non_terminal("pronPers_Mod_S", &pron);
        let pron_quant_s = g.non_terminal("pronQuant_S", &pron);
        let pron_quant_modified_s = g.non_terminal("pronQuantModified_S", &pron);

        let p_a1sg_s = g.non_terminal("pA1sg_S", &a1sg);
        let p_a2sg_s = g.non_terminal("pA2sg_S", &a2sg);
        let p_a3sg_s = g.non_terminal("pA3sg_S", &a3sg);
        let p_a1pl_s = g.non_terminal("pA1pl_S", &a1pl);
        let p_a2pl_s = g.non_terminal("pA2pl_S", &a2pl);
        let p_a3pl_s = g.non_terminal("pA3pl_S", &a3pl);
        let p_a1sg_mod_s = g.non_terminal("pA1sgMod_S", &a1sg);
        let p_a2sg_mod_s = g.non_terminal("pA2sgMod_S", &a2sg);

        let p_quant_a3sg_s = g.non_terminal("pQuantA3sg_S", &a3sg);
        let p_quant_a3pl_s = g.non_terminal("pQuantA3pl_S", &a3pl);
        let p_quant_mod_a3pl_s = g.non_terminal("pQuantModA3pl_S", &a3pl);
        let p_quant_a1pl_s = g.non_terminal("pQuantA1pl_S", &a1pl);
        let p_quant_a2pl_s = g.non_terminal("pQuantA2pl_S", &a2pl);

        let p_pnon_s = g.non_terminal("pPnon_S", &pnon);
        let p_pnon_mod_s = g.non_terminal("pPnonMod_S", &pnon);
        let p_p3sg_s = g.non_terminal("pP3sg_S", &p3sg);
        let p_p1pl_s = g.non_terminal("pP1pl_S", &p1pl);
        let p_p2pl_s = g.non_terminal("pP2pl_S", &p2pl);
        let p_p3pl_s = g.non_terminal("pP3pl_S", &p3pl);

        let p_nom_st = g.terminal("pNom_ST", &nom);
        let p_dat_st = g.terminal("pDat_ST", &dat);
        let p_acc_st = g.terminal("pAcc_ST", &acc);
        let p_loc_st = g.terminal("pLoc_ST", &loc);
        let p_abl_st = g.terminal("pAbl_ST", &abl);
        let p_gen_st = g.terminal("pGen_ST", &r#gen);
        let p_ins_st = g.terminal("pIns_ST", &ins);
        let p_equ_st = g.terminal("pEqu_ST", &equ);

        // -- personal pronouns --

        let ben = "ben_Pron_Pers";
        let sen = "sen_Pron_Pers";
        let o = "o_Pron_Pers";
        let biz = "biz_Pron_Pers";
        let siz = "siz_Pron_Pers";

        g.add_empty(pron_pers_s, p_a1sg_s, Some(C::RootIs(ben)));
        g.add_empty(pron_pers_s, p_a2sg_s, Some(C::RootIs(sen)));
        g.add_empty(pron_pers_s, p_a3sg_s, Some(C::RootIs(o)));
        g.add(pron_pers_s, p_a3pl_s, "nlAr", Some(C::RootIs(o)));
        g.add_empty(pron_pers_s, p_a1pl_s, Some(C::RootIs(biz)));
        g.add(pron_pers_s, p_a1pl_s, "lAr", Some(C::RootIs(biz)));
        g.add_empty(pron_pers_s, p_a2pl_s, Some(C::RootIs(siz)));
        g.add(pron_pers_s, p_a2pl_s, "lAr", Some(C::RootIs(siz)));

        // `ban/san` surface only in the dative
        g.add_empty(pron_pers_mod_s, p_a1sg_mod_s, Some(C::RootIs(ben)));
        g.add_empty(pron_pers_mod_s, p_a2sg_mod_s, Some(C::RootIs(sen)));
        g.add_empty(p_a1sg_mod_s, p_pnon_mod_s, None);
        g.add_empty(p_a2sg_mod_s, p_pnon_mod_s, None);
        g.add(p_pnon_mod_s, p_dat_st, "A", None);

        for s in [p_a1sg_s, p_a2sg_s, p_a3sg_s, p_a1pl_s, p_a2pl_s, p_a3pl_s] {
            g.add_empty(s, p_pnon_s, None);
        }

        // -- quantitive pronouns --

        let birbiri = "birbiri_Pron_Quant";
        let cogu = "çoğu_Pron_Quant";
        let oburu = "öbürü_Pron_Quant";
        let bircogu = "birçoğu_Pron_Quant";

        g.add_empty(pron_quant_s, p_quant_a3sg_s, None);
        g.add(
            pron_quant_s,
            p_quant_a3pl_s,
            "lAr",
            Some(C::RootIsNone(vec![cogu, bircogu, oburu])),
        );
        g.add_empty(pron_quant_s, p_quant_a3pl_s, Some(C::RootIsAny(vec![cogu, bircogu])));
        g.add_empty(pron_quant_s, p_quant_a1pl_s, Some(C::RootIsAny(vec![birbiri, cogu, bircogu])));
        g.add_empty(pron_quant_s, p_quant_a2pl_s, Some(C::RootIsAny(vec![birbiri, cogu, bircogu])));
        g.add_empty(pron_quant_modified_s, p_quant_mod_a3pl_s, None);
        g.add(p_quant_mod_a3pl_s, p_p3pl_s, "lArI", None);

        g.add_empty(
            p_quant_a3sg_s,
            p_p3sg_s,
            Some(
                C::RootIsAny(vec![birbiri, oburu, cogu, bircogu])
                    .and(C::not_have(Pa::ModifiedPronoun)),
            ),
        );
        g.add(
            p_quant_a3sg_s,
            p_p3sg_s,
            "sI",
            Some(C::RootIsAny(vec![birbiri]).and(C::not_have(Pa::ModifiedPronoun))),
        );
        g.add(p_quant_a3pl_s, p_p3pl_s, "I", Some(C::RootIsAny(vec![birbiri])));
        g.add_empty(p_quant_a3pl_s, p_p3pl_s, Some(C::RootIsAny(vec![cogu, bircogu])));
        g.add(p_quant_a1pl_s, p_p1pl_s, "ImIz", None);
        g.add(p_quant_a2pl_s, p_p2pl_s, "InIz", None);

        // -- pronoun case --

        g.add_empty(p_pnon_s, p_nom_st, None);
        g.add(p_pnon_s, p_dat_st, "+nA", Some(C::RootIsNone(vec![ben, sen])));
        g.add(p_pnon_s, p_acc_st, "+nI", None);
        g.add(p_pnon_s, p_loc_st, "+ndA", None);
        g.add(p_pnon_s, p_abl_st, "+ndAn", None);
        g.add(p_pnon_s, p_gen_st, "+nIn", Some(C::RootIsNone(vec![ben, sen, biz])));
        g.add(p_pnon_s, p_gen_st, "im", Some(C::RootIsAny(vec![ben, biz])));
        g.add(p_pnon_s, p_gen_st, "in", Some(C::RootIs(sen)));
        g.add(p_pnon_s, p_ins_st, "+nlA", None);
        g.add(p_pnon_s, p_equ_st, ">cA", None);

        for p in [p_p3sg_s, p_p1pl_s, p_p2pl_s, p_p3pl_s] {
            g.add_empty(p, p_nom_st, None);
            g.add(p, p_dat_st, "+nA", None);
            g.add(p, p_acc_st, "+nI", None);
            g.add(p, p_loc_st, "+ndA", None);
            g.add(p, p_abl_st, "+ndAn", None);
            g.add(p, p_gen_st, "+nIn", None);
            g.add(p, p_ins_st, "+ylA", None);
        }

        // -- verb states --

        let verb_root_s = g.non_terminal("verbRoot_S", &verb);
        let verb_root_vowel_drop_s = g.non_terminal("verbRoot_VowelDrop_S", &verb);
        let v_de_ye_root_s = g.non_terminal("vDeYeRoot_S", &verb);
        let v_lvd_unmod_root_s = g.non_terminal("vLastVowelDropUnmodRoot_S", &verb);
        let v_lvd_mod_root_s = g.non_terminal("vLastVowelDropModRoot_S", &verb);

        let v_a1sg_st = g.terminal("vA1sg_ST", &a1sg);
        let v_a2sg_st = g.terminal("vA2sg_ST", &a2sg);
        let v_a3sg_st = g.terminal("vA3sg_ST", &a3sg);
        let v_a1pl_st = g.terminal("vA1pl_ST", &a1pl);
        let v_a2pl_st = g.terminal("vA2pl_ST", &a2pl);
        let v_a3pl_st = g.terminal("vA3pl_ST", &a3pl);

        let v_imp_s = g.non_terminal("vImp_S", &imp);
        let v_imp_yemek_yi_s = g.non_terminal("vImpYemekYi_S", &imp);
        let v_imp_yemek_ye_s = g.non_terminal("vImpYemekYe_S", &imp);
        let v_prog_yor_s = g.non_terminal("vProgYor_S", &prog1);
        let v_aor_s = g.non_terminal("vAor_S", &aor);
        let v_aor_neg_s = g.non_terminal("vAorNeg_S", &aor);
        let v_aor_neg_empty_s = g.non_terminal("vAorNegEmpty_S", &aor);
        let v_neg_s = g.non_terminal("vNeg_S", &neg);
        let v_neg_prog1_s = g.non_terminal("vNegProg1_S", &neg);
        let v_past_s = g.non_terminal("vPast_S", &past);
        let v_narr_s = g.non_terminal("vNarr_S", &narr);
        let v_fut_s = g.non_terminal("vFut_S", &fut);
        let v_inf1_s = g.derivative("vInf1_S", &inf1);
        let v_pass_s = g.derivative("vPass_S", &pass);

        // -- verb inflection --

        g.add_empty(verb_root_s, v_imp_s, None);
        g.add_empty(v_imp_s, v_a2sg_st, None);
        g.add(v_imp_s, v_a3sg_st, "sIn", None);
        g.add(v_imp_s, v_a2pl_st, "+yIn", None);
        g.add(v_imp_s, v_a2pl_st, "+yInIz", None);
        g.add(v_imp_s, v_a3pl_st, "sInlAr", None);

        // `-Iyor` wants a consonant-final stem; vowel-final verbs arrive
        // through the dropped root
        g.add(verb_root_s, v_prog_yor_s, "Iyor", Some(C::not_have(Pa::LastLetterVowel)));
        g.add(verb_root_vowel_drop_s, v_prog_yor_s, "Iyor", None);
        g.add(v_prog_yor_s, v_a1sg_st, "um", None);
        g.add(v_prog_yor_s, v_a2sg_st, "sun", None);
        g.add_empty(v_prog_yor_s, v_a3sg_st, None);
        g.add(v_prog_yor_s, v_a1pl_st, "uz", None);
        g.add(v_prog_yor_s, v_a2pl_st, "sunuz", None);
        g.add(v_prog_yor_s, v_a3pl_st, "lar", None);

        g.add(
            verb_root_s,
            v_aor_s,
            "Ir",
            Some(C::has_root_attribute(Ra::AoristI).or(C::HasAnySuffixSurface)),
        );
        g.add(
            verb_root_s,
            v_aor_s,
            "Ar",
            Some(C::has_root_attribute(Ra::AoristA).and(has_no_surface())),
        );
        g.add(v_aor_s, v_a1sg_st, "Im", None);
        g.add(v_aor_s, v_a2sg_st, "sIn", None);
        g.add_empty(v_aor_s, v_a3sg_st, None);
        g.add(v_aor_s, v_a1pl_st, "Iz", None);
        g.add(v_aor_s, v_a2pl_st, "sInIz", None);
        g.add(v_aor_s, v_a3pl_st, "lAr", None);

        g.add(verb_root_s, v_neg_s, "mA", None);
        g.add_empty(v_neg_s, v_imp_s, None);
        g.add(v_neg_s, v_past_s, "dI", None);
        g.add(v_neg_s, v_narr_s, "mIş", None);
        g.add(v_neg_s, v_fut_s, "yAcA~k", None);
        g.add(v_neg_s, v_fut_s, "yAcA!ğ", None);
        g.add(v_neg_s, v_inf1_s, "mAk", None);
        g.add(v_neg_s, v_aor_neg_s, "z", None);
        g.add_empty(v_neg_s, v_aor_neg_empty_s, None);
        g.add(v_aor_neg_s, v_a2sg_st, "sIn", None);
        g.add_empty(v_aor_neg_s, v_a3sg_st, None);
        g.add(v_aor_neg_s, v_a2pl_st, "sInIz", None);
        g.add(v_aor_neg_s, v_a3pl_st, "lAr", None);
        g.add(v_aor_neg_empty_s, v_a1sg_st, "m", None);
        g.add(v_aor_neg_empty_s, v_a1pl_st, "yIz", None);

        // negative progressive: `oku+m+uyor`
        g.add(verb_root_s, v_neg_prog1_s, "m", None);
        g.add(v_neg_prog1_s, v_prog_yor_s, "Iyor", None);

        g.add(verb_root_s, v_past_s, ">dI", None);
        g.add(v_past_s, v_a1sg_st, "m", None);
        g.add(v_past_s, v_a2sg_st, "n", None);
        g.add_empty(v_past_s, v_a3sg_st, None);
        g.add(v_past_s, v_a1pl_st, "k", None);
        g.add(v_past_s, v_a2pl_st, "nIz", None);
        g.add(v_past_s, v_a3pl_st, "lAr", None);

        g.add(verb_root_s, v_narr_s, "mIş", None);
        g.add(v_narr_s, v_a1sg_st, "Im", None);
        g.add(v_narr_s, v_a2sg_st, "sIn", None);
        g.add_empty(v_narr_s, v_a3sg_st, None);
        g.add(v_narr_s, v_a1pl_st, "Iz", None);
        g.add(v_narr_s, v_a2pl_st, "sInIz", None);
        g.add(v_narr_s, v_a3pl_st, "lAr", None);

        g.add(verb_root_s, v_fut_s, "+yAcA~k", None);
        g.add(verb_root_s, v_fut_s, "+yAcA!ğ", None);
        g.add(v_fut_s, v_a1sg_st, "Im", None);
        g.add(v_fut_s, v_a2sg_st, "sIn", None);
        g.add_empty(v_fut_s, v_a3sg_st, None);
        g.add(v_fut_s, v_a1pl_st, "Iz", None);
        g.add(v_fut_s, v_a2pl_st, "sInIz", None);
        g.add(v_fut_s, v_a3pl_st, "lAr", None);

        g.add(verb_root_s, v_inf1_s, "mAk", None);
        g.add_empty(v_inf1_s, noun_inf1_root_s, None);

        g.add(
            verb_root_s,
            v_pass_s,
            "In",
            Some(C::has_root_attribute(Ra::PassiveIn).and(contains_none(&[&pass]))),
        );
        g.add(
            verb_root_s,
            v_pass_s,
            "InIl",
            Some(C::has_root_attribute(Ra::PassiveIn).and(contains_none(&[&pass]))),
        );
        g.add(
            verb_root_s,
            v_pass_s,
            "+nIl",
            Some(C::not_have_root_attribute(Ra::PassiveIn).and(contains_none(&[&pass]))),
        );
        g.add_empty(v_pass_s, verb_root_s, None);

        // vowel-dropping verbs (`kavur/kavr`): the unmodified root follows
        // the whole verb paradigm except the passive, which attaches to the
        // modified root as `-Il`
        g.copy_outgoing(verb_root_s, v_lvd_unmod_root_s, &[&pass]);
        g.add(v_lvd_mod_root_s, v_pass_s, "Il", None);

        // -- irregular de/ye --

        let de_ye = || C::RootSurfaceIsAny(vec!["de", "ye"]);
        let di_yi = || C::RootSurfaceIsAny(vec!["di", "yi"]);
        g.add(v_de_ye_root_s, v_fut_s, "yece~k", Some(di_yi()));
        g.add(v_de_ye_root_s, v_fut_s, "yece!ğ", Some(di_yi()));
        g.add(v_de_ye_root_s, v_prog_yor_s, "yor", Some(di_yi()));
        g.add(v_de_ye_root_s, v_past_s, "di", Some(de_ye()));
        g.add(v_de_ye_root_s, v_narr_s, "miş", Some(de_ye()));
        g.add(v_de_ye_root_s, v_aor_s, "r", Some(de_ye()));
        g.add(v_de_ye_root_s, v_neg_s, "me", Some(de_ye()));
        g.add(v_de_ye_root_s, v_neg_prog1_s, "m", Some(de_ye()));
        g.add(v_de_ye_root_s, v_inf1_s, "mek", Some(de_ye()));
        g.add(v_de_ye_root_s, v_pass_s, "n", Some(de_ye()));
        g.add(v_de_ye_root_s, v_pass_s, "nil", Some(de_ye()));
        g.add_empty(v_de_ye_root_s, v_imp_s, Some(C::RootSurfaceIs("de")));
        g.add_empty(v_de_ye_root_s, v_imp_yemek_ye_s, Some(C::RootSurfaceIs("ye")));
        g.add_empty(v_de_ye_root_s, v_imp_yemek_yi_s, Some(C::RootSurfaceIs("yi")));
        g.add(v_imp_yemek_yi_s, v_a2pl_st, "yin", None);
        g.add(v_imp_yemek_yi_s, v_a2pl_st, "yiniz", None);
        g.add_empty(v_imp_yemek_ye_s, v_a2sg_st, None);
        g.add(v_imp_yemek_ye_s, v_a3sg_st, "sin", None);
        g.add(v_imp_yemek_ye_s, v_a3pl_st, "sinler", None);

        // -- copula imek --

        let imek_root_s = g.non_terminal("imekRoot_S", &verb);
        let imek_past_s = g.non_terminal("imekPast_S", &past);
        let imek_narr_s = g.non_terminal("imekNarr_S", &narr);
        let imek_cond_s = g.non_terminal("imekCond_S", &cond);

        g.add(imek_root_s, imek_past_s, "di", None);
        g.add(imek_root_s, imek_narr_s, "miş", None);
        g.add(imek_root_s, imek_cond_s, "se", None);
        g.add(imek_past_s, v_a1sg_st, "m", None);
        g.add(imek_past_s, v_a2sg_st, "n", None);
        g.add_empty(imek_past_s, v_a3sg_st, None);
        g.add(imek_past_s, v_a1pl_st, "k", None);
        g.add(imek_past_s, v_a2pl_st, "niz", None);
        g.add(imek_past_s, v_a3pl_st, "ler", None);
        g.add(imek_narr_s, v_a1sg_st, "im", None);
        g.add(imek_narr_s, v_a2sg_st, "sin", None);
        g.add_empty(imek_narr_s, v_a3sg_st, None);
        g.add(imek_narr_s, v_a1pl_st, "iz", None);
        g.add(imek_narr_s, v_a2pl_st, "siniz", None);
        g.add(imek_narr_s, v_a3pl_st, "ler", None);
        g.add(imek_cond_s, v_a1sg_st, "m", None);
        g.add(imek_cond_s, v_a2sg_st, "n", None);
        g.add_empty(imek_cond_s, v_a3sg_st, None);
        g.add(imek_cond_s, v_a1pl_st, "k", None);
        g.add(imek_cond_s, v_a2pl_st, "niz", None);
        g.add(imek_cond_s, v_a3pl_st, "ler", None);

        // -- registry --

        let mut morphemes = HashMap::new();
        for m in [
            &noun, &adj, &verb, &pron, &a1sg, &a2sg, &a3sg, &a1pl, &a2pl, &a3pl, &pnon, &p1sg,
            &p2sg, &p3sg, &p1pl, &p2pl, &p3pl, &nom, &dat, &acc, &abl, &loc, &ins, &r#gen, &equ,
            &dim, &ness, &agt, &with, &without, &zero, &inf1, &pass, &neg, &past, &narr, &cond,
            &fut, &aor, &prog1, &imp,
        ] {
            morphemes.insert(m.id.clone(), Arc::clone(m));
        }

        let mut item_root_states = HashMap::new();
        item_root_states.insert("imek_Verb", imek_root_s);

        TurkishMorphotactics {
            graph: g,
            morphemes,
            noun_s,
            noun_compound_root_s,
            noun_proper_s,
            noun_last_vowel_drop_root_s: noun_lvd_root_s,
            adjective_root_st,
            adj_last_vowel_drop_root_s: adj_lvd_root_s,
            pron_pers_s,
            pron_pers_mod_s,
            pron_quant_s,
            pron_quant_modified_s,
            verb_root_s,
            verb_root_vowel_drop_s,
            verb_last_vowel_drop_unmod_root_s: v_lvd_unmod_root_s,
            verb_last_vowel_drop_mod_root_s: v_lvd_mod_root_s,
            v_de_ye_root_s,
            imek_root_s,
            item_root_states,
        }
    }

    pub fn graph(&self) -> &MorphotacticsGraph {
        &self.graph
    }

    pub fn morpheme(&self, id: &str) -> Option<&Arc<Morpheme>> {
        self.morphemes.get(id)
    }

    /// The root state a stem transition of this item enters.
    pub fn root_state(
        &self,
        item: &DictionaryItem,
        attributes: AttributeSet<PhoneticAttribute>,
    ) -> StateId {
        if let Some(&state) = self.item_root_states.get(item.id.as_str()) {
            return state;
        }
        if attributes.contains(PhoneticAttribute::LastLetterDropped) {
            return self.verb_root_vowel_drop_s;
        }
        match item.primary_pos {
            PrimaryPos::Noun if item.secondary_pos == SecondaryPos::ProperNoun => {
                self.noun_proper_s
            }
            PrimaryPos::Noun if item.has_attribute(RootAttribute::CompoundP3sgRoot) => {
                self.noun_compound_root_s
            }
            PrimaryPos::Noun => self.noun_s,
            PrimaryPos::Adjective => self.adjective_root_st,
            PrimaryPos::Pronoun if item.secondary_pos == SecondaryPos::PersonalPron => {
                self.pron_pers_s
            }
            PrimaryPos::Pronoun => self.pron_quant_s,
            PrimaryPos::Verb => self.verb_root_s,
            _ => self.noun_s,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader;

    #[test]
    fn test_graph_is_built() {
        let mt = TurkishMorphotactics::new();
        assert!(mt.graph().state_count() > 80);
        assert!(mt.graph().transition_count() > 200);
    }

    #[test]
    fn test_state_flags() {
        let mt = TurkishMorphotactics::new();
        let g = mt.graph();
        assert!(!g.state(mt.noun_s).terminal);
        assert!(g.state(mt.adjective_root_st).terminal);
        assert!(!g.state(mt.verb_root_s).terminal);
    }

    #[test]
    fn test_root_state_routing() {
        let mt = TurkishMorphotactics::new();
        let attrs = AttributeSet::new();

        let noun = loader::parse_line("ev").unwrap();
        assert_eq!(mt.root_state(&noun, attrs), mt.noun_s);

        let adj = loader::parse_line("güzel [P:Adj]").unwrap();
        assert_eq!(mt.root_state(&adj, attrs), mt.adjective_root_st);

        let verb = loader::parse_line("gelmek").unwrap();
        assert_eq!(mt.root_state(&verb, attrs), mt.verb_root_s);

        let proper = loader::parse_line("Ankara").unwrap();
        assert_eq!(mt.root_state(&proper, attrs), mt.noun_proper_s);

        let pron = loader::parse_line("biz [P:Pron,Pers]").unwrap();
        assert_eq!(mt.root_state(&pron, attrs), mt.pron_pers_s);
    }

    #[test]
    fn test_dropped_letter_routes_to_vowel_drop_root() {
        let mt = TurkishMorphotactics::new();
        let verb = loader::parse_line("aramak").unwrap();
        let mut attrs = AttributeSet::new();
        attrs.insert(PhoneticAttribute::LastLetterDropped);
        assert_eq!(mt.root_state(&verb, attrs), mt.verb_root_vowel_drop_s);
    }

    #[test]
    fn test_special_item_root_state() {
        let mt = TurkishMorphotactics::new();
        let imek = loader::parse_line("imek [A:Special]").unwrap();
        assert_eq!(mt.root_state(&imek, AttributeSet::new()), mt.imek_root_s);
    }

    #[test]
    fn test_vowel_drop_verb_root_skips_passive() {
        let mt = TurkishMorphotactics::new();
        let g = mt.graph();
        let unmod_targets: Vec<&str> = g
            .outgoing(mt.verb_last_vowel_drop_unmod_root_s)
            .map(|(_, t)| g.state(t.to).morpheme.id.as_str())
            .collect();
        assert!(!unmod_targets.is_empty());
        assert!(!unmod_targets.contains(&"Pass"));
        let mod_targets: Vec<&str> = g
            .outgoing(mt.verb_last_vowel_drop_mod_root_s)
            .map(|(_, t)| g.state(t.to).morpheme.id.as_str())
            .collect();
        assert_eq!(mod_targets, vec!["Pass"]);
    }

    #[test]
    fn test_morpheme_registry() {
        let mt = TurkishMorphotactics::new();
        assert!(mt.morpheme("Noun").is_some());
        assert!(mt.morpheme("A3pl").is_some());
        assert!(mt.morpheme("Dim").unwrap().derivational);
        assert!(mt.morpheme("NotAMorpheme").is_none());
    }
}
