//! Mineral reference table, grouped by mineral class.

use crate::{Mineral, MineralGroup};

const fn m(
    name: &'static str,
    formula: &'static str,
    system: &'static str,
    category: &'static str,
) -> Mineral {
    Mineral {
        name,
        formula,
        system,
        category,
    }
}

pub static MINERAL_GROUPS: &[MineralGroup] = &[
    MineralGroup {
        key: "tectosilicatos",
        title: "Tectosilicatos",
        minerals: &[
            m("Cuarzo", "SiO₂", "Trigonal", "tectosilicatos"),
            m("Microclina", "KAlSi₃O₈", "Triclínico", "tectosilicatos"),
            m("Ortoclasa", "KAlSi₃O₈", "Monoclínico", "tectosilicatos"),
            m("Sanidina", "KAlSi₃O₈", "Monoclínico", "tectosilicatos"),
            m("Anortoclasa", "(K,Na)AlSi₃O₈", "Triclínico", "tectosilicatos"),
            m("Plagioclasa", "(Na,Ca)(Si,Al)₃O₈", "Triclínico", "tectosilicatos"),
            m("Albita", "NaAlSi₃O₈", "Triclínico", "tectosilicatos"),
            m("Oligoclasa", "(Na,Ca)(Si,Al)₄O₈", "Triclínico", "tectosilicatos"),
            m("Andesina", "(Na,Ca)(Si,Al)₄O₈", "Triclínico", "tectosilicatos"),
            m("Labradorita", "(Ca,Na)(Si,Al)₄O₈", "Triclínico", "tectosilicatos"),
            m("Bytownita", "(Ca,Na)(Si,Al)₄O₈", "Triclínico", "tectosilicatos"),
            m("Anortita", "CaAl₂Si₂O₈", "Triclínico", "tectosilicatos"),
            m("Analcima", "NaAlSi₂O₆·H₂O", "Cúbico", "tectosilicatos"),
            m("Heulandita", "(Ca,Na)₂₋₃Al₃(Al,Si)₂Si₁₃O₃₆·12H₂O", "Monoclínico", "tectosilicatos"),
        ],
    },
    MineralGroup {
        key: "filosilicatos",
        title: "Filosilicatos",
        minerals: &[
            m("Moscovita", "KAl₂[(OH)₂/AlSi₃O₁₀]", "Monoclínico", "filosilicatos"),
            m("Biotita", "K(Mg,Fe²⁺,Mn²⁺)₃[(OH,F)₂|(Al,Fe³⁺,Ti³⁺)Si₃O₁₀]", "Monoclínico", "filosilicatos"),
            m("Clorita", "(Mg,Fe)₃Si₄O₁₀(OH)₂·(Mg,Fe)₃(OH)₆", "Monoclínico", "filosilicatos"),
            m("Sericita", "KAl₂(AlSi₃O₁₀)(OH)₂", "Monoclínico", "filosilicatos"),
            m("Caolinita", "Al₂Si₂O₅(OH)₄", "Triclínico", "filosilicatos"),
            m("Illita", "K₀.₆₅Al₂.₀[Al₀.₆₅Si₃.₃₅O₁₀](OH)₂", "Monoclínico", "filosilicatos"),
            m("Esmectita", "(Ca,Na)₀.₃(Al,Mg)₂Si₄O₁₀(OH)₂·nH₂O", "Monoclínico", "filosilicatos"),
            m("Montmorillonita", "(Ca,Na)₀.₃(Al,Mg)₂Si₄O₁₀(OH)₂·nH₂O", "Monoclínico", "filosilicatos"),
            m("Vermiculita", "(Mg,Fe,Al)₃(Al,Si)₄O₁₀(OH)₂·4H₂O", "Monoclínico", "filosilicatos"),
            m("Fengita", "K(Al,Mg,Fe)₂(Si,Al)₄O₁₀(OH)₂", "Monoclínico", "filosilicatos"),
            m("Paragonita", "NaAl₂(AlSi₃O₁₀)(OH)₂", "Monoclínico", "filosilicatos"),
            m("Pirofilita", "Al₂Si₄O₁₀(OH)₂", "Triclínico", "filosilicatos"),
            m("Talco", "Mg₃Si₄O₁₀(OH)₂", "Triclínico", "filosilicatos"),
            m("Flogopita", "KMg₃(AlSi₃O₁₀)(OH)₂", "Monoclínico", "filosilicatos"),
            m("Lepidolita", "K(Li,Al)₃(Al,Si,Rb)₄O₁₀(F,OH)₂", "Monoclínico", "filosilicatos"),
            m("Margarita", "CaAl₂(Al₂Si₂O₁₀)(OH)₂", "Monoclínico", "filosilicatos"),
            m("Antigorita", "Mg₃Si₂O₅(OH)₄", "Monoclínico", "filosilicatos"),
        ],
    },
    MineralGroup {
        key: "inosilicatos",
        title: "Inosilicatos",
        minerals: &[
            m("Enstatita", "(Mg,Fe)₂Si₂O₆", "Ortorrómbico", "inosilicatos"),
            m("Ferrosilita", "FeSiO₃", "Ortorrómbico", "inosilicatos"),
            m("Bronzita", "(Mg,Fe)₂Si₂O₆", "Ortorrómbico", "inosilicatos"),
            m("Hiperstena", "(Mg,Fe)SiO₃", "Ortorrómbico", "inosilicatos"),
            m("Diópsido", "CaMgSi₂O₆", "Monoclínico", "inosilicatos"),
            m("Hedenbergita", "CaFeSi₂O₆", "Monoclínico", "inosilicatos"),
            m("Augita", "(Ca,Mg,Fe)₂(Si,Al)₂O₆", "Monoclínico", "inosilicatos"),
            m("Pigeonita", "(Ca,Mg,Fe)(Mg,Fe)Si₂O₆", "Monoclínico", "inosilicatos"),
            m("Jadeíta", "NaAlSi₂O₆", "Monoclínico", "inosilicatos"),
            m("Onfacita", "(Ca,Na)(Mg,Fe²⁺,Fe³⁺,Al)Si₂O₆", "Monoclínico", "inosilicatos"),
            m("Aegirina", "NaFe³⁺Si₂O₆", "Monoclínico", "inosilicatos"),
            m("Espodumeno", "LiAlSi₂O₆", "Monoclínico", "inosilicatos"),
            m("Hornblenda", "(Ca,Na)₂₋₃(Mg,Fe,Al)₅(Al,Si)₈O₂₂(OH)₂", "Monoclínico", "inosilicatos"),
            m("Actinolita", "Ca₂(Mg,Fe)₅Si₈O₂₂(OH)₂", "Monoclínico", "inosilicatos"),
            m("Tremolita", "Ca₂Mg₅Si₈O₂₂(OH)₂", "Monoclínico", "inosilicatos"),
            m("Glaucofana", "Na₂(Mg,Fe)₃Al₂Si₈O₂₂(OH)₂", "Monoclínico", "inosilicatos"),
            m("Riebeckita", "Na₂(Fe²⁺,Mg)₃Fe₂³⁺Si₈O₂₂(OH)₂", "Monoclínico", "inosilicatos"),
            m("Antofilita", "(Mg,Fe)₇Si₈O₂₂(OH)₂", "Ortorrómbico", "inosilicatos"),
            m("Cummingtonita", "(Mg,Fe)₇Si₈O₂₂(OH)₂", "Monoclínico", "inosilicatos"),
            m("Uralita", "Ca₂(Mg,Fe)₄Al(Si₇Al)O₂₂(OH)₂", "Monoclínico", "inosilicatos"),
            m("Wollastonita", "CaSiO₃", "Triclínico", "inosilicatos"),
            m("Rodonita", "MnSiO₃", "Triclínico", "inosilicatos"),
        ],
    },
    MineralGroup {
        key: "nesosilicatos",
        title: "Nesosilicatos",
        minerals: &[
            m("Olivino", "(Mg,Fe)₂SiO₄", "Ortorrómbico", "nesosilicatos"),
            m("Forsterita", "Mg₂SiO₄", "Ortorrómbico", "nesosilicatos"),
            m("Fayalita", "Fe₂SiO₄", "Ortorrómbico", "nesosilicatos"),
            m("Granate", "X₃Y₂(SiO₄)₃", "Cúbico", "nesosilicatos"),
            m("Piropo", "Mg₃Al₂(SiO₄)₃", "Cúbico", "nesosilicatos"),
            m("Almandino", "Fe₃Al₂(SiO₄)₃", "Cúbico", "nesosilicatos"),
            m("Espesartina", "Mn₃Al₂(SiO₄)₃", "Cúbico", "nesosilicatos"),
            m("Grosularia", "Ca₃Al₂(SiO₄)₃", "Cúbico", "nesosilicatos"),
            m("Andradita", "Ca₃Fe₂(SiO₄)₃", "Cúbico", "nesosilicatos"),
            m("Uvarovita", "Ca₃Cr₂(SiO₄)₃", "Cúbico", "nesosilicatos"),
            m("Andalucita", "Al₂SiO₅", "Ortorrómbico", "nesosilicatos"),
            m("Sillimanita", "Al₂SiO₅", "Ortorrómbico", "nesosilicatos"),
            m("Cianita", "Al₂SiO₅", "Triclínico", "nesosilicatos"),
            m("Estaurolita", "Fe₂Al₉Si₄O₂₃(OH)", "Ortorrómbico", "nesosilicatos"),
            m("Cloritoide", "(Fe²⁺,Mg,Mn)₂Al₄Si₂O₁₀(OH)₄", "Triclínico", "nesosilicatos"),
            m("Topacio", "Al₂SiO₄(F,OH)₂", "Ortorrómbico", "nesosilicatos"),
            m("Circón", "ZrSiO₄", "Tetragonal", "nesosilicatos"),
            m("Humita", "Mg₇(SiO₄)₃(F,OH)₂", "Ortorrómbico", "nesosilicatos"),
        ],
    },
    MineralGroup {
        key: "sorosilicatos",
        title: "Sorosilicatos",
        minerals: &[
            m("Epidota", "Ca₂(Al,Fe³⁺)₃Si₃O₁₂(OH)", "Monoclínico", "sorosilicatos"),
            m("Clinozoisita", "Ca₂Al₃Si₃O₁₂(OH)", "Monoclínico", "sorosilicatos"),
            m("Zoisita", "Ca₂Al₃Si₃O₁₂(OH)", "Ortorrómbico", "sorosilicatos"),
            m("Prehnita", "Ca₂Al(AlSi₃O₁₀)(OH)₂", "Ortorrómbico", "sorosilicatos"),
            m("Pumpellyita", "Ca₂MgAl₂(SiO₄)(Si₂O₇)(OH)₂·H₂O", "Monoclínico", "sorosilicatos"),
            m("Lawsonita", "CaAl₂Si₂O₇(OH)₂·H₂O", "Ortorrómbico", "sorosilicatos"),
            m("Allanita", "(Ce,Ca,Y)₂(Al,Fe³⁺)₃(SiO₄)₃(OH)", "Monoclínico", "sorosilicatos"),
            m("Vesuvianita", "Ca₁₀(Mg,Fe)₂Al₄(SiO₄)₅(Si₂O₇)₂(OH)₄", "Tetragonal", "sorosilicatos"),
        ],
    },
    MineralGroup {
        key: "ciclosilicatos",
        title: "Ciclosilicatos",
        minerals: &[
            m("Turmalina", "X₃Y₆(BO₃)₃Si₆O₁₈(OH)₄", "Trigonal", "ciclosilicatos"),
            m("Berilo", "Be₃Al₂Si₆O₁₈", "Hexagonal", "ciclosilicatos"),
            m("Cordierita", "(Mg,Fe)₂Al₄Si₅O₁₈", "Ortorrómbico", "ciclosilicatos"),
        ],
    },
    MineralGroup {
        key: "carbonatos",
        title: "Carbonatos",
        minerals: &[
            m("Calcita", "CaCO₃", "Trigonal", "carbonatos"),
            m("Dolomita", "CaMg(CO₃)₂", "Trigonal", "carbonatos"),
            m("Aragonito", "CaCO₃", "Ortorrómbico", "carbonatos"),
            m("Siderita", "FeCO₃", "Trigonal", "carbonatos"),
            m("Rodocrosita", "MnCO₃", "Trigonal", "carbonatos"),
            m("Magnesita", "MgCO₃", "Trigonal", "carbonatos"),
            m("Ankerita", "Ca(Fe,Mg,Mn)(CO₃)₂", "Trigonal", "carbonatos"),
            m("Smithsonita", "ZnCO₃", "Trigonal", "carbonatos"),
            m("Cerusita", "PbCO₃", "Ortorrómbico", "carbonatos"),
        ],
    },
    MineralGroup {
        key: "oxidos",
        title: "Óxidos",
        minerals: &[
            m("Magnetita", "Fe₃O₄", "Cúbico", "oxidos"),
            m("Hematita", "Fe₂O₃", "Trigonal", "oxidos"),
            m("Ilmenita", "FeTiO₃", "Trigonal", "oxidos"),
            m("Rutilo", "TiO₂", "Tetragonal", "oxidos"),
            m("Anatasa", "TiO₂", "Tetragonal", "oxidos"),
            m("Brookita", "TiO₂", "Ortorrómbico", "oxidos"),
            m("Casiterita", "SnO₂", "Tetragonal", "oxidos"),
            m("Cromita", "FeCr₂O₄", "Cúbico", "oxidos"),
            m("Espinela", "MgAl₂O₄", "Cúbico", "oxidos"),
            m("Corindon", "Al₂O₃", "Trigonal", "oxidos"),
            m("Cristobalita", "SiO₂", "Tetragonal", "oxidos"),
            m("Tridimita", "SiO₂", "Hexagonal", "oxidos"),
            m("Ópalo", "SiO₂·nH₂O", "Amorfo", "oxidos"),
            m("Columbita", "(Fe,Mn)(Nb,Ta)₂O₆", "Ortorrómbico", "oxidos"),
            m("Tantalita", "(Fe,Mn)(Ta,Nb)₂O₆", "Ortorrómbico", "oxidos"),
        ],
    },
    MineralGroup {
        key: "sulfuros",
        title: "Sulfuros",
        minerals: &[
            m("Pirita", "FeS₂", "Cúbico", "sulfuros"),
            m("Pirrotina", "Fe₁₋ₓS", "Hexagonal", "sulfuros"),
            m("Calcopirita", "CuFeS₂", "Tetragonal", "sulfuros"),
            m("Pentlandita", "(Fe,Ni)₉S₈", "Cúbico", "sulfuros"),
            m("Galena", "PbS", "Cúbico", "sulfuros"),
            m("Esfalerita", "ZnS", "Cúbico", "sulfuros"),
            m("Molibdenita", "MoS₂", "Hexagonal", "sulfuros"),
            m("Marcasita", "FeS₂", "Ortorrómbico", "sulfuros"),
            m("Arsenopirita", "FeAsS", "Monoclínico", "sulfuros"),
        ],
    },
    MineralGroup {
        key: "sulfatos",
        title: "Sulfatos",
        minerals: &[
            m("Yeso", "CaSO₄·2H₂O", "Monoclínico", "sulfatos"),
            m("Anhidrita", "CaSO₄", "Ortorrómbico", "sulfatos"),
            m("Baritina", "BaSO₄", "Ortorrómbico", "sulfatos"),
            m("Celestina", "SrSO₄", "Ortorrómbico", "sulfatos"),
            m("Alunita", "KAl₃(SO₄)₂(OH)₆", "Trigonal", "sulfatos"),
            m("Jarosita", "KFe₃(SO₄)₂(OH)₆", "Trigonal", "sulfatos"),
        ],
    },
    MineralGroup {
        key: "fosfatos",
        title: "Fosfatos",
        minerals: &[
            m("Apatito", "Ca₅(PO₄)₃(F,Cl,OH)", "Hexagonal", "fosfatos"),
            m("Fluorapatito", "Ca₅(PO₄)₃F", "Hexagonal", "fosfatos"),
            m("Hidroxiapatito", "Ca₅(PO₄)₃(OH)", "Hexagonal", "fosfatos"),
            m("Clorapatito", "Ca₅(PO₄)₃Cl", "Hexagonal", "fosfatos"),
            m("Monazita", "(Ce,La,Nd,Th)PO₄", "Monoclínico", "fosfatos"),
            m("Xenotima", "YPO₄", "Tetragonal", "fosfatos"),
        ],
    },
    MineralGroup {
        key: "haluros",
        title: "Haluros",
        minerals: &[
            m("Halita", "NaCl", "Cúbico", "haluros"),
            m("Fluorita", "CaF₂", "Cúbico", "haluros"),
            m("Silvita", "KCl", "Cúbico", "haluros"),
        ],
    },
    MineralGroup {
        key: "alteracion",
        title: "Alteración y Secundarios",
        minerals: &[
            m("Serpentina", "(Mg,Fe)₃Si₂O₅(OH)₄", "Monoclínico", "alteracion"),
            m("Saussurita", "Mezcla de plagioclasa alterada + epidoto + sericita", "Variable", "alteracion"),
            m("Iddingsita", "Olivino alterado + esmectita + goethita", "Variable", "alteracion"),
            m("Limonita", "FeO(OH)·nH₂O", "Amorfo", "alteracion"),
            m("Goethita", "FeO(OH)", "Ortorrómbico", "alteracion"),
            m("Lepidocrocita", "γ-FeO(OH)", "Ortorrómbico", "alteracion"),
            m("Gibbsita", "Al(OH)₃", "Monoclínico", "alteracion"),
            m("Böhmita", "AlO(OH)", "Ortorrómbico", "alteracion"),
            m("Diásporo", "AlO(OH)", "Ortorrómbico", "alteracion"),
        ],
    },
    MineralGroup {
        key: "feldespatoides",
        title: "Feldespatoides",
        minerals: &[
            m("Nefelina", "Na₃KAl₄Si₄O₁₆", "Hexagonal", "feldespatoides"),
            m("Leucita", "KAlSi₂O₆", "Tetragonal", "feldespatoides"),
            m("Sodalita", "Na₈(Al₆Si₆O₂₄)Cl₂", "Cúbico", "feldespatoides"),
            m("Cancrinita", "Na₆Ca₂[(CO₃)₂|Al₆Si₆O₂₄]·2H₂O", "Hexagonal", "feldespatoides"),
            m("Hauyna", "(Na,Ca)₄₋₈Al₆Si₆(O,S)₂₄(SO₄,Cl)₁₋₂", "Cúbico", "feldespatoides"),
            m("Nosean", "Na₈Al₆Si₆O₂₄(SO₄)·H₂O", "Cúbico", "feldespatoides"),
            m("Lazurita", "(Na,Ca)₈(AlSiO₄)₆(S,SO₄,Cl)₂", "Cúbico", "feldespatoides"),
        ],
    },
    MineralGroup {
        key: "zeolitas",
        title: "Zeolitas",
        minerals: &[
            m("Heulandita", "(Ca,Na)₂₋₃Al₃(Al,Si)₂Si₁₃O₃₆·12H₂O", "Monoclínico", "zeolitas"),
            m("Estilbita", "NaCa₄(Si₂₇Al₉)O₇₂·28H₂O", "Monoclínico", "zeolitas"),
            m("Laumontita", "CaAl₂Si₄O₁₂·4H₂O", "Monoclínico", "zeolitas"),
            m("Wairakita", "CaAl₂Si₄O₁₂·2H₂O", "Monoclínico", "zeolitas"),
            m("Mordenita", "(Ca,Na₂,K₂)Al₂Si₁₀O₂₄·7H₂O", "Ortorrómbico", "zeolitas"),
            m("Clinoptilolita", "(Na,K,Ca)₂₋₃Al₃(Al,Si)₂Si₁₃O₃₆·12H₂O", "Monoclínico", "zeolitas"),
            m("Chabazita", "CaAl₂Si₄O₁₂·6H₂O", "Trigonal", "zeolitas"),
        ],
    },
    MineralGroup {
        key: "accesorios",
        title: "Accesorios",
        minerals: &[
            m("Titanita", "CaTiSiO₅", "Monoclínico", "accesorios"),
            m("Baddeleyita", "ZrO₂", "Monoclínico", "accesorios"),
            m("Perovskita", "CaTiO₃", "Ortorrómbico", "accesorios"),
            m("Melilita", "(Ca,Na)₂(Al,Mg,Fe²⁺)(Si,Al)₂O₇", "Tetragonal", "accesorios"),
            m("Sodalita", "Na₈(Al₆Si₆O₂₄)Cl₂", "Cúbico", "accesorios"),
        ],
    },
    MineralGroup {
        key: "evaporitas",
        title: "Evaporitas",
        minerals: &[
            m("Halita", "NaCl", "Cúbico", "evaporitas"),
            m("Silvita", "KCl", "Cúbico", "evaporitas"),
            m("Carnalita", "KMgCl₃·6H₂O", "Ortorrómbico", "evaporitas"),
            m("Polihalita", "K₂Ca₂Mg(SO₄)₄·2H₂O", "Triclínico", "evaporitas"),
            m("Kieserita", "MgSO₄·H₂O", "Monoclínico", "evaporitas"),
            m("Epsomita", "MgSO₄·7H₂O", "Ortorrómbico", "evaporitas"),
        ],
    },
    MineralGroup {
        key: "minerales_autigénicos",
        title: "Minerales Autigénicos",
        minerals: &[
            m("Glauconita", "(K,Na)(Fe³⁺,Al,Mg)₂(Si,Al)₄O₁₀(OH)₂", "Monoclínico", "minerales_autigénicos"),
            m("Chamosite", "(Fe²⁺,Mg,Al,Fe³⁺)₆(Si,Al)₄O₁₀(OH,O)₈", "Monoclínico", "minerales_autigénicos"),
            m("Berthierina", "(Fe²⁺,Fe³⁺,Al)₃(Si,Al)₂O₅(OH)₄", "Triclínico", "minerales_autigénicos"),
            m("Verdina", "(Fe²⁺,Fe³⁺,Al)₃(Si,Al)₂O₅(OH)₄", "Triclínico", "minerales_autigénicos"),
            m("Pirita framboidal", "FeS₂", "Cúbico", "minerales_autigénicos"),
            m("Marcasita", "FeS₂", "Ortorrómbico", "minerales_autigénicos"),
        ],
    },
    MineralGroup {
        key: "minerales_detríticos",
        title: "Minerales Detríticos",
        minerals: &[
            m("Chert", "SiO₂", "Trigonal", "minerales_detríticos"),
            m("Feldespato detrítico", "(K,Na,Ca)(Si,Al)₄O₈", "Variable", "minerales_detríticos"),
            m("Fragmentos líticos", "Variable", "Variable", "minerales_detríticos"),
            m("Micas detríticas", "Variable", "Monoclínico", "minerales_detríticos"),
            m("Minerales pesados", "Variable", "Variable", "minerales_detríticos"),
            m("Turmalina detrítica", "X₃Y₆(BO₃)₃Si₆O₁₈(OH)₄", "Trigonal", "minerales_detríticos"),
            m("Circón detrítico", "ZrSiO₄", "Tetragonal", "minerales_detríticos"),
            m("Rutilo detrítico", "TiO₂", "Tetragonal", "minerales_detríticos"),
        ],
    },
];
