//! Word classes that drive the hyphen-split decision
//!
//! Entries of [`NO_SPLIT_PREFIXES`] are regular-expression fragments: the
//! `.*` entries match any stem with that ending, and [`LOCANT_PREFIX`]
//! matches numeric locants such as `2,2'`.

/// Nomenclature prefixes that keep a hyphenated token whole
pub const NO_SPLIT_PREFIXES: &[&str] = &[
    ".*ano", ".*ato", ".*azo", ".*boc", ".*bromo", ".*cbz", ".*chloro", ".*eno", ".*fluoro",
    ".*fmoc", ".*ido", ".*ino", ".*io", ".*iodo", ".*mercapto", ".*nitro", ".*ono", ".*oso",
    ".*oxalo", ".*oxo", ".*oxy", ".*phospho", ".*telluro", ".*tms", ".*yl", ".*ylen", ".*ylene",
    ".*yliden", ".*ylidene", ".*ylidyn", ".*ylidyne",
    "aci", "adeno", "aldehydo", "allo", "alpha", "altro", "ambi", "ante", "anti", "aorto",
    "arachno", "arch", "as", "be", "beta", "bi", "bio", "bis", "catena", "centi", "chi",
    "chiro", "circum", "cis", "closo", "co", "colo", "conjuncto", "conta", "contra", "cortico",
    "cosa", "counter", "cran", "crypto", "cyclo", "de", "deca", "deci", "delta", "demi", "di",
    "dis", "dl", "eco", "electro", "endo", "ennea", "ent", "epi", "epsilon", "erythro", "eta",
    "ex", "exo", "extra", "ferro", "galacto", "gamma", "gastro", "giga", "gluco", "glycero",
    "graft", "gulo", "hemi", "hepta", "hexa", "homo", "hydro", "hypho", "hypo", "ideo", "idio",
    "in", "infra", "inter", "intra", "iota", "iso", "judeo", "kappa", "keto", "kis", "lambda",
    "lyxo", "macro", "manno", "medi", "meso", "meta", "micro", "mid", "milli", "mini", "mono",
    "mu", "muco", "multi", "musculo", "myo", "nano", "neo", "neuro", "nido", "nitro", "non",
    "nona", "nor", "novem", "novi", "nu", "octa", "octi", "octo", "omega", "omicron", "ortho",
    "over", "paleo", "pan", "para", "pelvi", "penta", "peri", "pheno", "phi", "pi", "pica",
    "pneumo", "poly", "post", "preter", "pro", "psi", "quadri", "quater", "quinque", "re",
    "recto", "rho", "ribo", "salpingo", "scyllo", "sec", "semi", "sept", "septi", "sero",
    "sesqui", "sexi", "sigma", "sn", "soci", "sub", "super", "supra", "sur", "sym", "syn",
    "talo", "tau", "tele", "ter", "tera", "tert", "tetra", "theta", "threo", "trans", "tri",
    "triangulo", "tris", "uber", "ultra", "un", "uni", "unsym", "upsilon", "veno", "ventriculo",
    "xi", "xylo", "zeta",
];

/// Locant stem (`1`, `6′`, `1,2`, `2,3,4`) that keeps a hyphenated token whole
pub const LOCANT_PREFIX: &str = r"[0-9][`′']?(,[0-9][`′']?(,[0-9][`′']?)?)?";

/// Words that are split off either side of a hyphen; a suffix may also carry
/// an `un`/`de`/`re`/`pre` prefix or a plural `s`
pub const SPLIT_WORDS: &[&str] = &[
    "absorption", "acid", "active", "addition", "adsorption", "air", "alkaline", "all",
    "analogous", "angle", "area", "armed", "atom", "atomic", "average", "band", "bandwidth",
    "based", "binding", "bioactivity", "biomonitor", "black", "blood", "blue", "bond", "bonds",
    "bottom", "bound", "bridged", "broad", "built", "caged", "capped", "carrier", "cast",
    "catalysed", "catalyzed", "cation", "chains", "charge", "chemo", "chrome", "circuit",
    "coated", "color", "colour", "complex", "complexes", "compounds", "concentration",
    "configuration", "conjugated", "containing", "coordinate", "core", "cored", "cotransport",
    "cross", "current", "dark", "dash", "dashed", "deficiency", "deficient", "density",
    "dependence", "dependent", "deplete", "derivatised", "derivatives", "derivatized",
    "derived", "desorption", "diabetes", "diabetic", "dimensional", "dimer", "distribution",
    "domain", "donor", "dot", "double", "driven", "dual", "dye", "efficiency", "eight",
    "electrolyte", "electron", "emersion", "energy", "enzyme", "exchange", "excimer",
    "expanded", "extraction", "field", "film", "first", "five", "form", "formation", "four",
    "free", "frequency", "front", "function", "functionalised", "functionalized", "fused",
    "gas", "generation", "geometry", "grafted", "grain", "green", "group", "groups", "guest",
    "half", "high", "human", "hybrid", "hyperaccumulator", "immersion", "independent",
    "induced", "inducible", "insensitive", "intermediate", "ions", "isomer", "isomers",
    "kinase", "known", "lamp", "laser", "last", "layer", "left", "ligand", "light", "like",
    "lined", "linked", "lipoprotein", "liquid", "long", "low", "lower", "luminance",
    "luminescence", "majority", "material", "mediated", "medium", "metal", "migrated", "mirror",
    "mixed", "mode", "model", "modified", "moiety", "monomer", "nanoparticle", "nanotube",
    "near", "nearest", "neighbor", "neighbour", "nine", "nonfermentative", "note", "octahedra",
    "oil", "only", "open", "order", "organic", "oxidase", "peak", "peptide", "phase",
    "photocurrent", "photon", "photovoltage", "pillared", "plane", "plasma", "point", "polymer",
    "poor", "position", "potential", "protected", "protein", "pseudo", "quasi", "rate", "ratio",
    "reaction", "reactive", "rearranged", "red", "reduction", "release", "replete", "resistant",
    "responsive", "rich", "right", "saturated", "scale", "scan", "second", "secretion",
    "selective", "selectivity", "self", "sensitive", "seven", "shape", "shell", "short", "side",
    "signal", "single", "six", "solid", "soluble", "solution", "solvent", "space", "specific",
    "spectrum", "split", "stage", "state", "step", "strategy", "substituent", "substituted",
    "substrate", "surface", "temperature", "template", "terminal", "terminus", "tethered",
    "the", "thermal", "thin", "three", "through", "time", "transfer", "transition", "treated",
    "treatment", "triplet", "two", "type", "units", "upper", "view", "visible", "voltage",
    "water", "wave", "white", "wide", "width", "yellow", "zero",
];
