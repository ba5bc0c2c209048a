//! Period-handling vocabulary
//!
//! Abbreviations are matched against the lower-cased token and keep their
//! trailing period. Collocations are `(word before the period, word after)`
//! pairs, both lower-case, where the period never ends a sentence.

/// Lower-case tokens, each ending in a period, that are never split
pub const ABBREVIATIONS: &[&str] = &[
    "+vs.", ".e.g.", "1vs.", "24h.", "2vs.", "3vs.", "4vs.", "5vs.", "6vs.", "7vs.", "8vs.",
    "9vs.", "abs.", "acad.", "acc.", "adm.", "adv.", "agric.", "al.", "ala.", "allg.", "am.",
    "ampl.", "anal.", "angew.", "anh.", "anorg.", "appl.", "approx.", "apr.", "aq.", "ariz.",
    "atmos.", "aug.", "aut.", "av.", "ave.", "avg.", "bioanal.", "biochem.", "biochim.",
    "biol.", "biomater.", "biomed.", "biomol.", "biophys.", "biosci.", "biotech.",
    "biotechnol.", "bornm.", "brev.", "bros.", "ca.", "calif.", "canc.", "catal.", "cf.",
    "cf.fig.", "chem.", "cheminf.", "chg.", "chim", "chromatogr.", "cli.", "clin.", "col.",
    "colo.", "comb.", "commun.", "compd.", "comput.", "conc.", "condens.", "conn.", "const.",
    "corp.", "cosmochim.", "cryst.", "crystallogr.", "ct.", "curr.", "dec.", "dil.", "dr.",
    "ed.", "elec.", "electroanal.", "engl.", "environ.", "eq.", "eqn.", "eqns.", "eqs.",
    "equiv.", "eqv.", "et.", "etc.", "etm.", "eur.", "evs.", "excit.", "fal.", "feb.", "fig.",
    "figs.", "fla.", "fri.", "fromref.", "ft.", "funct.", "gen.", "geochim.", "gvs.", "hlv.",
    "hoc.", "ifvs.", "inc.", "inf.", "inorg.", "instrum.", "int.", "ipp.", "ipvs.", "ivs.",
    "jan.", "jpn.", "jr.", "jvs.", "kcatvs.", "kemistil.", "ketvs.", "kinet.", "kobsdvs.",
    "kobsvs.", "ksvs.", "kvs.", "l-arg-conj.", "lett.", "liq.", "lit.", "ltd.", "magn.", "maj.",
    "mater.", "max.", "med.", "messrs.", "mfa.", "mich.", "minn.", "mnvs.", "mob.", "mp.",
    "mpn.", "mpph.", "mr.", "mrs.", "ms.", "mshs.", "mut.", "mvs.", "nanotech.", "nat.",
    "natl.", "nmvs.", "nov.", "nucl.", "occ.", "oct.", "okla.", "oncol.", "opin.", "org.",
    "pa.", "ph.d.", "pharm.", "phd.", "phm.", "photobio.", "photobiol.", "photochem.", "phys.",
    "physiol.", "polym.", "proc.", "prod.", "prof.", "prog.", "psvs.", "radiat.", "ref.",
    "refs.", "relat.", "rep.", "reps.", "res.", "resp.", "rev.", "s-1vs.", "sat.", "sci.",
    "sel.", "sen.", "sep.", "sept.", "soc.", "sol.", "spectrom.", "spectrosc.", "sr.", "st.",
    "struct.", "stud.", "sulf.", "surf.", "sym.", "synth.", "syst.", "technol.", "temp.",
    "tenn.", "theor.", "thurs.", "tll.", "toxicol.", "trans.", "tues.", "tvs.", "univ.", "v1.",
    "v2.", "vel.", "viz.", "vol.", "vs.", "vs.i.", "vs.n.", "vvs.", "wed.", "wt.", "xmp.",
    "xvs.", "yr.", "zvs.", "±s.d.", "Δεvs.", "Λvs.", "ηvs.", "λexc.", "λmax.", "νs.", "σvs.",
    "φfvs.", "χmtvs.", "χmvs.",
];

/// Word pairs around a period that must stay together
pub const COLLOCATIONS: &[(&str, &str)] = &[
    ("a", "commune"),
    ("a", "niger"),
    ("c", "limon"),
    ("d", "bardawil"),
    ("e", "antonini"),
    ("e", "coli"),
    ("e", "colia"),
    ("j", "adv"),
    ("j", "agric"),
    ("j", "am"),
    ("j", "anal"),
    ("j", "appl"),
    ("j", "biol"),
    ("j", "biomed"),
    ("j", "catal"),
    ("j", "chem"),
    ("j", "cheminf"),
    ("j", "chromatogr"),
    ("j", "comb"),
    ("j", "electroanal"),
    ("j", "inorg"),
    ("j", "liquid"),
    ("j", "mater"),
    ("j", "membrane"),
    ("j", "mol"),
    ("j", "nucl"),
    ("j", "org"),
    ("j", "photochem"),
    ("j", "phys"),
    ("j", "radiat"),
    ("j", "steroid"),
    ("j", "struct"),
    ("l", "extract"),
    ("l", "mesenteroides"),
    ("m", "1.5"),
    ("mol", "biol"),
    ("mol", "struct"),
    ("n", "crassa"),
    ("p", "bursaria"),
    ("p", "simplex"),
    ("p", "ulysses"),
    ("p", "νersutus"),
    ("s", "cattleya"),
    ("s", "coelicolor"),
    ("t", "maritima"),
];
