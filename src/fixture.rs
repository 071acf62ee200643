// Small conversion tables shared by the unit tests.  They include a
// sentinel row, duplicate keys and unparseable rows.

use lazy_static::lazy_static;

use crate::converter::Converter;

pub(crate) const MUNSELL_TO_RGB: &str = "\
id,name,prefix,number,value,chroma,red,green,blue
1,2.5R 1/2,R,2.5,1,2,45,21,31
2,2.5R 2/2,R,2.5,2,2,72,44,51
3,2.5R 2/4,R,2.5,2,4,85,38,50
4,2.5R 3/2,R,2.5,3,2,99,69,74
5,2.5R 3/4,R,2.5,3,4,114,63,72
6,2.5R 3/6,R,2.5,3,6,128,55,70
7,2.5R 4/2,R,2.5,4,2,124,94,98
8,2.5R 4/4,R,2.5,4,4,141,87,96
9,2.5R 4/6,R,2.5,4,6,157,79,93
10,2.5R 4/8,R,2.5,4,8,172,69,90
11,2.5R 5/2,R,2.5,5,2,151,120,124
12,2.5R 5/4,R,2.5,5,4,169,113,121
13,2.5R 5/6,R,2.5,5,6,186,104,118
14,2.5R 5/8,R,2.5,5,8,202,94,115
15,2.5R 5/10,R,2.5,5,10,216,83,112
16,2.5R 5/20,R,2.5,5,20,255,0,80
17,2.5R 6/2,R,2.5,6,2,178,147,150
18,2.5R 6/4,R,2.5,6,4,197,139,147
19,2.5R 6/6,R,2.5,6,6,215,130,144
20,2.5R 7/2,R,2.5,7,2,205,175,178
21,2.5R 7/4,R,2.5,7,4,225,167,174
22,2.5R 8/2,R,2.5,8,2,233,203,206
23,2.5R 8/4,R,2.5,8,4,253,195,202
24,2.5R 9/2,R,2.5,9,2,255,232,235
25,2.5R 1/2,R,2.5,1,2,1,2,3
26,5R 1/2,R,5,1,2,48,20,28
27,5R 2/2,R,5,2,2,75,43,48
28,5R 3/2,R,5,3,2,102,68,71
29,5R 4/2,R,5,4,2,128,93,95
30,5R 5/2,R,5,5,2,155,119,121
31,5R 5/10,R,5,5,10,220,80,95
32,5R 5/20,R,5,5,20,255,0,0
33,5R 6/2,R,5,6,2,182,146,148
34,5R 7/2,R,5,7,2,209,174,175
35,5R 8/2,R,5,8,2,236,202,203
36,5R 9/2,R,5,9,2,255,231,232
37,5R 9/4,R,5,9,4,255,222,224
38,5R 9/6,R,5,9,6,255,212,216
39,5R 0/0,R,5,0,0,0,0,0
40,7.5R 5/2,R,7.5,5,2,158,118,114
41,7.5R 5/4,R,7.5,5,4,178,110,104
42,7.5R 6/4,R,7.5,6,4,200,140,130
43,10R 5/2,R,10,5,2,160,117,108
44,10R 5/4,R,10,5,4,182,108,93
45,5Q 5/4,Q,5,5,4,1,1,1
46,2.5Y 5/4,Y,2.5,5,4,190,160,60
47,7.5G 5/2,G,7.5,5,2,112,128,120
48,7.5G 5/16,G,7.5,5,16,0,138,110
49,2.5BG 5/6,BG,2.5,5,6,50,130,120
50,10BG 5/6,BG,10,5,6,0,95,129
51,7.5B 4/2,B,7.5,4,2,90,100,115
52,7.5B 4/14,B,7.5,4,14,0,52,149
53,broken,R,abc,1,1,1,1,1
";

/// Entries left once sentinel, duplicate and broken rows are dropped.
pub(crate) const FORWARD_ENTRIES: usize = 49;

pub(crate) const RGB_TO_MUNSELL: &str = "\
red,green,blue,hue,value,chroma
0,34,17,1.36G,1.00,3.83
45,21,31,2.5R,1,2
0,95,129,9.79BG,5,6
255,0,0,5R,5,20
200,80,90,5R,5,12
0,52,149,7.5B,4,14
0,138,110,7.5G,5,16
100,0,40,5RP,3,10
151,120,124,2.5R,5,2
160,117,108,10R,5,2
0,34,17,5R,2,2
1,2,3,ZZ,1,1
";

pub(crate) const REVERSE_ENTRIES: usize = 10;

lazy_static! {
    pub(crate) static ref CONVERTER: Converter =
        Converter::from_csv(MUNSELL_TO_RGB.as_bytes(),
                            RGB_TO_MUNSELL.as_bytes())
            .expect("fixture tables are valid");
}
