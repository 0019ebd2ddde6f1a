//! Texture and sedimentary-component reference table.

use crate::{TermEntry, TermGroup};

const fn t(term: &'static str, description: &'static str) -> TermEntry {
    TermEntry { term, description }
}

pub static TEXTURE_GROUPS: &[TermGroup] = &[
    TermGroup {
        key: "texturas_igneas",
        title: "Texturas Ígneas",
        entries: &[
            t("Holocristalina", "Roca completamente cristalina"),
            t("Holohialina", "Roca completamente vítrea"),
            t("Hipocristalina", "Roca parcialmente cristalina y vítrea"),
            t("Afanítica", "Cristales no visibles a simple vista (<1mm)"),
            t("Fanerítica", "Cristales visibles a simple vista (>1mm)"),
            t("Criptocristalina", "Cristales microscópicos (<0.01mm), solo visibles con microscopio"),
            t("Microcristalina", "Cristales de tamaño intermedio (0.01-0.1mm), visibles con lupa"),
            t("Pegmatítica", "Cristales muy grandes (>3cm)"),
            t("Aplítica", "Cristales muy finos (<1mm), textura de azúcar"),
            t("Porfídica", "Fenocristales en matriz de grano fino"),
            t("Glomeroporfídica", "Fenocristales agrupados en cúmulos"),
            t("Seriada", "Gradación continua de tamaños cristalinos"),
            t("Equigranular", "Cristales de tamaño similar"),
            t("Inequigranular", "Cristales de tamaños diferentes"),
            t("Panidiomorfa", "Todos los cristales con caras propias (euhedrales)"),
            t("Alotriomorfa", "Cristales sin caras propias (anhedrales)"),
            t("Hipidiomorfa", "Mezcla de cristales con y sin caras (subhedrales)"),
            t("Intergranular", "Vidrio entre cristales de plagioclasa"),
            t("Intersertal", "Vidrio entre listones de plagioclasa"),
            t("Pilotaxítica", "Microlitos orientados en flujo"),
            t("Hialopilítica", "Microlitos en base vítrea"),
            t("Traquítica", "Feldespatos tabulares subparalelos"),
            t("Ofítica", "Plagioclasa incluida en piroxeno"),
            t("Subofítica", "Plagioclasa parcialmente incluida"),
            t("Diabásica", "Variante de textura ofítica en diabasas"),
            t("Poiquilítica", "Cristal grande con inclusiones orientadas al azar"),
            t("Oikocrística", "Cristal huésped (oikocristo) con inclusiones"),
            t("Simplectítica", "Intercrecimiento vermicular"),
            t("Miarmequítica", "Intercrecimiento cuarzo-feldespato"),
            t("Granofírica", "Intercrecimiento cuarzo-feldespato en rocas ígneas"),
            t("Pértita", "Intercrecimiento K-feldespato/plagioclasa"),
            t("Antipertita", "Intercrecimiento plagioclasa/K-feldespato"),
            t("Coronítica", "Mineral rodeado por corona de reacción"),
            t("Rapakivi", "Feldespato K rodeado por plagioclasa"),
            t("Vesicular", "Con vesículas o burbujas de gas"),
            t("Amigdalar", "Vesículas rellenas de minerales secundarios"),
            t("Escoriácea", "Muy vesicular, aspecto de escoria"),
            t("Pumícea", "Extremadamente vesicular, densidad muy baja"),
            t("Esferulítica", "Agregados radiales cristalinos"),
            t("Variolítica", "Esferulitos en rocas básicas"),
            t("Axiolítica", "Cristales radiales desde un eje central"),
            t("Vítrea", "Textura de vidrio volcánico"),
            t("Perlítica", "Fracturas concéntricas en vidrio"),
            t("Obsidiánica", "Vidrio volcánico masivo y denso"),
            t("Fluidal", "Bandas de flujo magmático"),
            t("Eutaxítica", "Fragmentos vítreos aplastados y soldados"),
            t("Clástica", "Fragmentos piroclásticos soldados"),
            t("Cumular", "Cristales acumulados por gravedad"),
            t("Adcumular", "Cumulatos con poco material intercumular"),
            t("Ortocumular", "Cumulatos con material intercumular abundante"),
        ],
    },
    TermGroup {
        key: "texturas_sedimentarias",
        title: "Texturas Sedimentarias",
        entries: &[
            t("Clástica", "Compuesta por fragmentos detríticos"),
            t("Cristalina", "Formada por precipitación química"),
            t("Bioclástica", "Compuesta por fragmentos biogénicos"),
            t("Oolítica", "Con ooides esféricos concéntricos"),
            t("Pisoidea", "Con pisoides >2mm"),
            t("Oncolítica", "Con oncoides irregulares"),
            t("Peloidal", "Con pellets fecales"),
            t("Intraclástica", "Con fragmentos de la misma formación"),
            t("Gradada", "Gradación de tamaño de grano"),
            t("Masiva", "Sin estructuras internas visibles"),
            t("Laminada", "Con láminas <1cm"),
            t("Estratificada", "Con estratos >1cm"),
            t("Entrecruzada", "Con estratificación cruzada"),
            t("Conglomerática", "Con clastos >2mm redondeados"),
            t("Brechosa", "Con clastos >2mm angulosos"),
            t("Arenosa", "Tamaño arena (0.06-2mm)"),
            t("Limosa", "Tamaño limo (0.004-0.06mm)"),
            t("Arcillosa", "Tamaño arcilla (<0.004mm)"),
            t("Matriz soportada", "Clastos en matriz fina"),
            t("Clastos soportados", "Clastos en contacto mutuo"),
            t("Empacamiento cerrado", "Clastos muy próximos"),
            t("Empacamiento abierto", "Abundante matriz/cemento"),
        ],
    },
    TermGroup {
        key: "texturas_metamorficas",
        title: "Texturas Metamórficas",
        entries: &[
            t("Foliada", "Con orientación preferencial de minerales"),
            t("No foliada", "Sin orientación mineral preferencial"),
            t("Esquistosa", "Foliación con minerales planares"),
            t("Gnéisica", "Bandas claras y oscuras alternantes"),
            t("Pizarrosa", "Foliación muy fina y plana"),
            t("Filítica", "Foliación intermedia, brillo sedoso"),
            t("Granoblástica", "Cristales equidimensionales"),
            t("Lepidoblástica", "Cristales tabulares orientados"),
            t("Nematoblástica", "Cristales prismáticos orientados"),
            t("Blastoporfirítica", "Porfiroblastos en matriz fina"),
            t("Poiquiloblástica", "Porfiroblastos con inclusiones"),
            t("Coronítica", "Coronas de reacción mineral"),
            t("Simplectítica", "Intercrecimiento vermicular"),
            t("Cataclástica", "Deformación frágil, fragmentación"),
            t("Milonnítica", "Deformación dúctil, recristalización"),
            t("Blastomilonnítica", "Recristalización en milonita"),
            t("Protomilonnítica", "Deformación incipiente"),
            t("Ultramilonnítica", "Deformación extrema"),
            t("Pseudomórfica", "Mantiene forma del mineral original"),
            t("Relicta", "Conserva textura de roca original"),
            t("Diablástica", "Textura ígnea preservada"),
            t("Hornféslica", "Metamorfismo de contacto"),
            t("Decusada", "Cristales entrecruzados al azar"),
        ],
    },
    TermGroup {
        key: "componentes_rocas_sedimentarias",
        title: "Componentes de Rocas Sedimentarias",
        entries: &[
            t("Aloquímicos", "Componentes carbonáticos transportados"),
            t("Ortoquímicos", "Componentes precipitados in situ"),
            t("Ooides", "Granos esféricos con estructura concéntrica"),
            t("Pellets", "Granos fecales elipsoidales"),
            t("Intraclastos", "Fragmentos de sedimento consolidado"),
            t("Bioclastos", "Fragmentos de organismos"),
            t("Oncoides", "Ooides irregulares por algas"),
            t("Pisoides", "Ooides grandes >2mm"),
            t("Cemento", "Material cristalino que une granos"),
            t("Matriz", "Material fino entre granos"),
            t("Porosidad", "Espacios vacíos en la roca"),
            t("Empacamiento", "Arreglo espacial de los granos"),
            t("Redondez", "Grado de desgaste de clastos"),
            t("Esfericidad", "Aproximación a forma esférica"),
            t("Selección", "Uniformidad de tamaños de grano"),
        ],
    },
    TermGroup {
        key: "tipos_cemento",
        title: "Tipos de Cemento",
        entries: &[
            t("Cemento calcítico", "Cemento de calcita"),
            t("Cemento silíceo", "Cemento de cuarzo/sílice"),
            t("Cemento ferruginoso", "Cemento de óxidos de hierro"),
            t("Cemento arcilloso", "Cemento de minerales arcillosos"),
            t("Cemento fosfático", "Cemento de fosfatos"),
            t("Cemento dolomítico", "Cemento de dolomita"),
            t("Cemento evaporítico", "Cemento de evaporitas"),
            t("Cemento zeolítico", "Cemento de zeolitas"),
        ],
    },
    TermGroup {
        key: "tipos_porosidad",
        title: "Tipos de Porosidad",
        entries: &[
            t("Porosidad primaria", "Formada durante deposición"),
            t("Porosidad secundaria", "Formada por diagénesis"),
            t("Porosidad intergranular", "Entre granos"),
            t("Porosidad intragranular", "Dentro de granos"),
            t("Porosidad intercristalina", "Entre cristales"),
            t("Porosidad móldica", "Por disolución de granos"),
            t("Porosidad vugular", "Cavidades irregulares grandes"),
            t("Porosidad fenestral", "Huecos tipo ventana"),
            t("Porosidad de fractura", "En fracturas y fisuras"),
        ],
    },
    TermGroup {
        key: "estructuras_sedimentarias",
        title: "Estructuras Sedimentarias",
        entries: &[
            t("Estratificación paralela", "Capas horizontales paralelas"),
            t("Estratificación cruzada", "Láminas inclinadas"),
            t("Estratificación gradada", "Gradación vertical de tamaño"),
            t("Laminación", "Capas <1cm de espesor"),
            t("Ripples", "Ondulaciones en superficie"),
            t("Hummocky", "Estratificación monticular"),
            t("Slumping", "Deformación sinsedimentaria"),
            t("Load casts", "Estructuras de hundimiento"),
            t("Flame structures", "Estructuras en llama"),
            t("Bioturbación", "Perturbación por organismos"),
        ],
    },
    TermGroup {
        key: "alteraciones_diageneticas",
        title: "Alteraciones Diagenéticas",
        entries: &[
            t("Compactación", "Reducción de porosidad por presión"),
            t("Cementación", "Precipitación de cemento"),
            t("Disolución", "Pérdida de material por solución"),
            t("Neomorfismo", "Recristalización"),
            t("Reemplazamiento", "Sustitución mineral"),
            t("Silicificación", "Reemplazamiento por sílice"),
            t("Dolomitización", "Reemplazamiento por dolomita"),
            t("Piritización", "Formación de pirita"),
            t("Glauconitización", "Formación de glauconita"),
            t("Fosfatización", "Impregnación fosfática"),
        ],
    },
];
