//! Chemical element vocabulary
//!
//! Used to recognise oxidation-state notation such as `Fe(III)` or
//! `copper(II)`.

/// Element names, including former and variant spellings
pub const ELEMENTS: &[&str] = &[
    "actinium", "aluminium", "aluminum", "americium", "antimony", "argon", "arsenic",
    "astatine", "barium", "berkelium", "beryllium", "bismuth", "bohrium", "boron", "bromine",
    "cadmium", "caesium", "calcium", "californium", "carbon", "cerium", "cesium", "chlorine",
    "chromium", "cobalt", "copernicium", "copper", "curium", "darmstadtium", "dubnium",
    "dysprosium", "einsteinium", "erbium", "europium", "fermium", "flerovium", "fluorine",
    "francium", "gadolinium", "gallium", "germanium", "gold", "hafnium", "hassium", "helium",
    "holmium", "hydrargyrum", "hydrogen", "indium", "iodine", "iridium", "iron", "kalium",
    "krypton", "lanthanum", "lawrencium", "lead", "lithium", "livermorium", "lutetium",
    "magnesium", "manganese", "meitnerium", "mendelevium", "mercury", "molybdenum", "natrium",
    "neodymium", "neon", "neptunium", "nickel", "niobium", "nitrogen", "nobelium", "osmium",
    "oxygen", "palladium", "phosphorus", "platinum", "plumbum", "plutonium", "polonium",
    "potassium", "praseodymium", "promethium", "protactinium", "radium", "radon", "rhenium",
    "rhodium", "roentgenium", "rubidium", "ruthenium", "rutherfordium", "samarium", "scandium",
    "seaborgium", "selenium", "silicon", "silver", "sodium", "stannum", "stibium", "strontium",
    "sulfur", "tantalum", "technetium", "tellurium", "terbium", "thallium", "thorium",
    "thulium", "tin", "titanium", "tungsten", "ununoctium", "ununpentium", "ununseptium",
    "ununtrium", "uranium", "vanadium", "wolfram", "xenon", "ytterbium", "yttrium", "zinc",
    "zirconium",
];

/// Element symbols, including the placeholder names of unconfirmed elements
pub const ELEMENT_SYMBOLS: &[&str] = &[
    "Ac", "Ag", "Al", "Am", "Ar", "As", "At", "Au", "B", "Ba", "Be", "Bh", "Bi", "Bk", "Br",
    "C", "Ca", "Cd", "Ce", "Cf", "Cl", "Cm", "Cn", "Co", "Cr", "Cs", "Cu", "Db", "Ds", "Dy",
    "Er", "Es", "Eu", "F", "Fe", "Fl", "Fm", "Fr", "Ga", "Gd", "Ge", "H", "He", "Hf", "Hg",
    "Ho", "Hs", "I", "In", "Ir", "K", "Kr", "La", "Li", "Lr", "Lu", "Lv", "Md", "Mg", "Mn",
    "Mo", "Mt", "N", "Na", "Nb", "Nd", "Ne", "Ni", "No", "Np", "O", "Os", "P", "Pa", "Pb", "Pd",
    "Pm", "Po", "Pr", "Pt", "Pu", "Ra", "Rb", "Re", "Rf", "Rg", "Rh", "Rn", "Ru", "S", "Sb",
    "Sc", "Se", "Sg", "Si", "Sm", "Sn", "Sr", "Ta", "Tb", "Tc", "Te", "Th", "Ti", "Tl", "Tm",
    "U", "Uuo", "Uup", "Uus", "Uut", "V", "W", "Xe", "Y", "Yb", "Zn", "Zr",
];
