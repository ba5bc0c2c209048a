//! Solvent vocabulary for [`SolventMatcher`](crate::solvent::SolventMatcher)

/// Common solvent names, formulas and acronyms
pub const SOLVENTS: &[&str] = &[
    "(CD3)2CO", "(CDCl2)2", "(CH3)2CHOH", "(CH3)2CO", "(CH3)2NCOH",
    "1,1,1,3,3,3-hexafluoro-2-propanol", "1,1,1,3,3,3-hexafluoropropan-2-ol",
    "1,1,1-trifluoroethanol", "1,1,2-trichloroethane", "1,2,4-trichlorobenzene", "1,2-c2h4cl2",
    "1,2-dichloroethane", "1,2-dimethoxyethane", "1,2-dimethylbenzene", "1,2-ethanediol",
    "1,4-dimethylbenzene", "1,4-dioxane", "1-butanol", "1-butylimidazole", "1-cyclohexanol",
    "1-decanol", "1-heptanol", "1-hexanol", "1-methylethyl acetate", "1-octanol", "1-pentanol",
    "1-phenylethanol", "1-propanol", "1-undecanol", "2,2,2-trifluoroethanol",
    "2,2,4-trimethylpentane", "2-(n-morpholino)ethanesulfonic acid", "2-butanol", "2-butanone",
    "2-me-thf", "2-methf", "2-methoxy-2-methylpropane", "2-methyl tetrahydrofuran",
    "2-methylpentane", "2-methylpropan-1-ol", "2-methylpropan-2-ol", "2-methyltetrahydrofuran",
    "2-proh", "2-propanol", "2-propyl acetate", "2-pyrrolidone", "2Me-THF", "2MeTHF",
    "3-methyl-pentane", "4-methyl-1,3-dioxolan-2-one", "ACN", "AOT", "AcOEt", "AcOH", "AgNO3",
    "BCN", "BHDC", "BTN", "Bu2O", "Bu4NBr", "Bu4NClO4", "Bu4NPF6", "BuCN", "BuOH", "C2D5CN",
    "C2H4Cl2", "C2H5CN", "C2H5OH", "C5H5N", "C6D6", "C6H12", "C6H14", "C6H5CH3", "C6H5Cl",
    "C6H6", "C7D8", "C7H8", "CCl4", "CD2Cl2", "CD3CN", "CD3COCD3", "CD3OD", "CD3SOCD3", "CDCl3",
    "CH2Cl2", "CH2ClCH2Cl", "CH3C6H5", "CH3CN", "CH3CO2H", "CH3COCH3", "CH3COOH", "CH3Cl",
    "CH3NHCOH", "CH3NO2", "CH3OD", "CH3OH", "CH3Ph", "CH3SOCH3", "CHCl2", "CHCl3", "CHX",
    "Cl2CH2", "ClCH2CH2Cl", "D2O", "DCE", "DCM", "DEE", "DMA", "DMAc", "DMF", "DMSO", "Et2O",
    "EtAc", "EtAcO", "EtCN", "EtOAc", "EtOD", "EtOH", "F3-EtOH", "F3-ethanol", "H2O",
    "H2O + TX", "H2O-Triton X", "H2O2", "H2SO4", "HBF4", "HCO2H", "HCONH2", "HCl", "HClO4",
    "HDA", "HEPES", "HEX", "HFIP,", "HFP", "HNO3", "IPA", "KBr", "KPB", "LiCl", "MCH", "MES",
    "MIBK", "Me-THF", "Me2CO", "MeCN", "MeCO2Et", "MeNO2", "MeOD", "MeOH", "MeTHF", "NMP",
    "NPA", "Na2SO4", "NaCl", "NaClO4", "NaHCO3", "NaOH", "ODCB", "PBS", "PeOH", "PhCH3", "PhCN",
    "PhCl", "PhMe", "Phenyl ethanol", "PrCN", "PrOH", "SDS", "SNO2", "TBABF4", "TBAF", "TBAH",
    "TBAOH", "TBAP", "TBAPF6", "TBP", "TEA", "TEAP", "TEOA", "TFA", "TFE", "THF", "THF-d8",
    "TX-100", "Triton X-100", "[nBu4N][BF4]", "acetic acid", "aceto-nitrile", "acetone",
    "acetonitrile", "acetononitrile", "aniline", "anisole", "benzene", "benzonitrile",
    "benzyl alcohol", "bromoform", "butan-1-ol", "butan-2-ol", "butan-2-one", "butane",
    "butanol", "butanone", "butene", "butyl acetate", "butyl acetonitrile", "butyl alcohol",
    "butyl amine", "butyl chloride", "butyl imidazole", "butyronitrile", "c-hexane",
    "carbon disulfide", "carbon tetrachloride", "chlorobenzene", "chloroform", "chloromethane",
    "chlorotoluene", "cumene", "cyclohexane", "cyclohexanol", "cyclopentyl methyl ether",
    "decalin", "decan-1-ol", "decane", "decanol", "di-isopropyl ether", "di-n-butyl ether",
    "di-n-hexyl ether", "dibromoethane", "dibutoxymethane", "dibutyl ether", "dichloro-methane",
    "dichlorobenzene", "dichloroethane", "dichloromethane", "diethoxymethane",
    "diethyl carbonate", "diethyl ether", "diethylamine", "diethylether", "diglyme",
    "dihexyl ether", "diiodomethane", "diisopropyl ether", "diisopropylamine",
    "dimethoxyethane", "dimethoxymethane", "dimethyl acetamide", "dimethyl acetimide",
    "dimethyl benzene", "dimethyl carbonate", "dimethyl ether", "dimethyl formamide",
    "dimethyl sulfoxide", "dimethylacetamide", "dimethylbenzene", "dimethylformamide",
    "dimethylformanide", "dimethylsulfoxide", "dioctyl sodium sulfosuccinate", "dioxane",
    "dioxolane", "dipropyl ether", "ethane diol", "ethane-1,2-diol", "ethanol",
    "ethyl (S)-2-hydroxypropanoate", "ethyl acetate", "ethyl benzoate", "ethyl formate",
    "ethyl lactate", "ethyl propionate", "ethylacetamide", "ethylacetate", "ethylene carbonate",
    "ethylene glycol", "ethyleneglycol", "ethylhexan-1-ol", "eucalyptol", "formamide",
    "formic acid", "glacial acetic acid", "glycerol", "heavy water", "heptan-1-ol", "heptane",
    "heptanol", "heptene", "hexadecylamine", "hexafluoroisopropanol", "hexafluoropropanol",
    "hexan-1-ol", "hexane", "hexanes", "hexanol", "hexene", "hexyl ether", "hydrochloric acid",
    "hydrogen peroxide", "iodobenzene", "isohexane", "isooctane", "isopropanol",
    "isopropyl benzene", "ligroine", "limonene", "mTHF", "mesitylene", "methanamide",
    "methanol", "methoxybenzene", "methoxyethylamine", "methyl acetamide",
    "methyl acetoacetate", "methyl benzene", "methyl butane", "methyl cyclohexane",
    "methyl ethyl ketone", "methyl formamide", "methyl formate", "methyl isobutyl ketone",
    "methyl laurate", "methyl methanoate", "methyl naphthalene", "methyl pentane",
    "methyl propan-1-ol", "methyl propan-2-ol", "methyl propionate", "methyl pyrrolidin-2-one",
    "methyl pyrrolidine", "methyl pyrrolidinone", "methyl t-butyl ether",
    "methyl tetrahydrofuran", "methyl-2-pyrrolidone", "methylbenzene", "methylcyclohexane",
    "methylene chloride", "methylformamide", "methyltetrahydrofuran", "morpholine", "n,n-DMF",
    "n,n-dimethylacetamide", "n,n-dimethylformamide", "n-HEX", "n-butanol", "n-butyl acetate",
    "n-decane", "n-heptane", "n-hexane", "n-methylformamide", "n-methylpyrrolidone", "n-nonane",
    "n-octanol", "n-pentane", "n-propanol", "nBu4NBF4", "nitric acid", "nitrobenzene",
    "nitromethane", "nonane", "nujol", "o-dichlorobenzene", "o-xylene", "octan-1-ol", "octane",
    "octanol", "octene", "p-xylene", "pentan-1-ol", "pentane", "pentanol", "pentanone",
    "pentene", "perchloric acid", "phenoxyethanol", "phenyl acetylene", "phenylamine",
    "phenylethanolamine", "phenylmethanol", "phosphate", "phosphate buffered saline", "pinane",
    "piperidine", "polytetrafluoroethylene", "potassium bromide", "potassium phosphate buffer",
    "propan-1-ol", "propan-2-ol", "propane", "propane-1,2,3-triol", "propane-1,2-diol",
    "propanol", "propene", "propionic acid", "propionitrile", "propyl acetate", "propyl amine",
    "propylene carbonate", "propylene glycol", "pyridine", "pyrrolidone", "quinoline",
    "silver nitrate", "sodium chloride", "sodium hydroxide", "sodium perchlorate",
    "sulfuric acid", "t-butanol", "tert-butanol", "tert-butyl alcohol",
    "tetrabutylammonium hexafluorophosphate", "tetrabutylammonium hydroxide",
    "tetrachloroethane", "tetrachloroethylene", "tetrachloromethane", "tetrafluoroethylene",
    "tetrahydrofuran", "tetralin", "tetramethylsilane", "tetramethylurea", "tetrapiperidine",
    "tin dioxide", "titanium dioxide", "toluene", "tri-n-butyl phosphate", "triacetate",
    "triacetin", "tribromomethane", "tributyl phosphate", "trichlorobenzene", "trichloroethene",
    "trichloromethane", "triethyl amine", "triethyl phosphate", "triethylamine",
    "trifluoroacetic acid", "trifluoroethanol", "trifluoroethanol ", "trimethyl benzene",
    "trimethyl pentane", "tris", "undecan-1-ol", "undecanol", "valeronitrile", "water",
    "xylene", "xylol",
];

/// Name prefixes that may precede a solvent name
pub const PREFIXES: &[&str] = &[
    "iso", "meso", "meta", "ortho", "para", "sec", "tert",
];
