//! `map2` through `map15`: combine several generators with one function.
//!
//! On every call the generators are evaluated left to right, each exactly
//! once, and their results are passed to the combining function in the same
//! order.

use crate::generator::Generator;
use crate::source::Source;

macro_rules! map_n {
    ($(#[$doc:meta])* $func:ident, $name:ident; $($g:ident: $G:ident),+) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name<$($G,)+ F> {
            $($g: $G,)+
            combine: F,
        }

        impl<$($G,)+ K, F> Generator for $name<$($G,)+ F>
        where
            $($G: Generator,)+
            F: FnMut($(<$G as Generator>::Output),+) -> K,
        {
            type Output = K;

            fn generate_one(&mut self, src: &mut Source) -> K {
                $(let $g = self.$g.generate_one(src);)+
                (self.combine)($($g),+)
            }
        }

        $(#[$doc])*
        pub fn $func<$($G,)+ K, F>($($g: $G,)+ combine: F) -> $name<$($G,)+ F>
        where
            $($G: Generator,)+
            F: FnMut($(<$G as Generator>::Output),+) -> K,
        {
            $name { $($g,)+ combine }
        }
    };
}

map_n!(
    /// Combine 2 generators.
    map2, Map2; g1: G1, g2: G2
);
map_n!(
    /// Combine 3 generators.
    map3, Map3; g1: G1, g2: G2, g3: G3
);
map_n!(
    /// Combine 4 generators.
    map4, Map4; g1: G1, g2: G2, g3: G3, g4: G4
);
map_n!(
    /// Combine 5 generators.
    map5, Map5; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5
);
map_n!(
    /// Combine 6 generators.
    map6, Map6; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6
);
map_n!(
    /// Combine 7 generators.
    map7, Map7; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7
);
map_n!(
    /// Combine 8 generators.
    map8, Map8; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8
);
map_n!(
    /// Combine 9 generators.
    map9, Map9; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8, g9: G9
);
map_n!(
    /// Combine 10 generators.
    map10, Map10; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8, g9: G9,
    g10: G10
);
map_n!(
    /// Combine 11 generators.
    map11, Map11; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8, g9: G9,
    g10: G10, g11: G11
);
map_n!(
    /// Combine 12 generators.
    map12, Map12; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8, g9: G9,
    g10: G10, g11: G11, g12: G12
);
map_n!(
    /// Combine 13 generators.
    map13, Map13; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8, g9: G9,
    g10: G10, g11: G11, g12: G12, g13: G13
);
map_n!(
    /// Combine 14 generators.
    map14, Map14; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8, g9: G9,
    g10: G10, g11: G11, g12: G12, g13: G13, g14: G14
);
map_n!(
    /// Combine 15 generators.
    map15, Map15; g1: G1, g2: G2, g3: G3, g4: G4, g5: G5, g6: G6, g7: G7, g8: G8, g9: G9,
    g10: G10, g11: G11, g12: G12, g13: G13, g14: G14, g15: G15
);
