//! Precomputed constants for the Ed25519 twisted Edwards curve.
//!
//! Curve: `−x² + y² = 1 + d·x²·y²` over the field of `2²⁵⁵ − 19` with
//! `d = −121665/121666`, birationally equivalent to Curve25519. Base
//! point `B` has `y = 4/5`.
//!
//! The folding table holds the sixteen subset sums of
//! `{B, 2⁶⁴·B, 2¹²⁸·B, 2¹⁹²·B}` in precomputed-affine form
//! `(y+x, y−x, 2d·x·y)`: entry `i` with bit `j` set includes `2^(64·j)·B`.
//! Splitting a 256-bit scalar into four 64-bit limbs and gathering one bit
//! per limb at each position turns a 256-double multiplication into 64
//! double-and-add steps against this table. The same table serves the
//! dual multiplication used by signature verification.
//!
//! All values are process-lifetime constants; nothing here is secret.

use crate::edwards::group::{CachedPoint, PrecompPoint};
use crate::field::FieldElement;

/// The curve constant `d`.
pub(crate) const D: FieldElement = FieldElement([
    0x75EB4DCA135978A3,
    0x00700A4D4141D8AB,
    0x8CC740797779E898,
    0x52036CEE2B6FFE73,
]);

/// `2·d`, used by the extended addition formulas.
pub(crate) const D2: FieldElement = FieldElement([
    0xEBD69B9426B2F159,
    0x00E0149A8283B156,
    0x198E80F2EEF3D130,
    0x2406D9DC56DFFCE7,
]);

/// `1/d`, used to unscale a table entry when it seeds an accumulator.
pub(crate) const DI: FieldElement = FieldElement([
    0x25E0F276CDC9F843,
    0x0B5DD6984279542E,
    0x2B162114CDB9CF66,
    0x40907ED214D5CE43,
]);

/// `sqrt(−1) = 2^((p−1)/4)`, the square-root fix-up of point decoding.
pub(crate) const SQRT_MINUS_ONE: FieldElement = FieldElement([
    0xC4EE1B274A0EA0B0,
    0x2F431806AD2FE478,
    0x2B4D00993DFBD7A7,
    0x2B8324804FC1DF0B,
]);

const fn pa(ypx: [u64; 4], ymx: [u64; 4], t2d: [u64; 4]) -> PrecompPoint {
    PrecompPoint {
        ypx: FieldElement(ypx),
        ymx: FieldElement(ymx),
        t2d: FieldElement(t2d),
    }
}

/// Subset sums of `{B, 2⁶⁴·B, 2¹²⁸·B, 2¹⁹²·B}` in `(y+x, y−x, 2d·x·y)`
/// form; entry 0 is the identity.
pub(crate) const BASE_FOLDING: [PrecompPoint; 16] = [
    pa(
        [0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000],
        [0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000],
        [0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000],
    ),
    pa(
        [0x2FBC93C6F58C3B85, 0xCF932DC6FB8C0E19, 0x270B4898643D42C2, 0x07CF9D3A33D4BA65],
        [0x9D103905D740913E, 0xFD399F05D140BEB3, 0xA5C18434688F8A09, 0x44FD2F9298F81267],
        [0xABC91205877AAA68, 0x26D9E823CCAAC49E, 0x5A1B7DCBDD43598C, 0x6F117B689F0C65A8],
    ),
    pa(
        [0xCD2A65E777D1F515, 0x548991878FAA60F1, 0xB1B73BBCDABC06E5, 0x654878CBA97CC9FB],
        [0x51138EC78DF6B0FE, 0x5397DA89E575F51B, 0x09207A1D717AF1B9, 0x2102FDBA2B20D650],
        [0x969EE405055CE6A1, 0x36BCA7681251AD29, 0x3A1AF517AA7DA415, 0x0AD725DB29ECB2BA],
    ),
    pa(
        [0x0055C585601E59E8, 0x8793342B66480E60, 0x3E14AAD0FE45E44C, 0x26EAD8E64813CF2B],
        [0xCB75B8B69C8462A4, 0x2DD86FC567D31CD7, 0xCD1972EC881342F6, 0x0975B5970FC12F2F],
        [0x63CF2303DA5BA743, 0x04BF9D8152F1BA6E, 0x333790D0AA7367DA, 0x534670479DF6C5EA],
    ),
    pa(
        [0x583B04BFACAD8EA2, 0x29B743E8148BE884, 0x2B1E583B0810C5DB, 0x2B5449E58EB3BBAA],
        [0x5F3A7562EB3DBE47, 0xF7EA38548EBDA0B8, 0x00C3E53145747299, 0x1304E9E71627D551],
        [0x789814D26ADC9CFE, 0x3C1BAB3F8B48DD0B, 0xDA0FE1FFF979C60A, 0x4468DE2D7C2DD693],
    ),
    pa(
        [0x2118278DE3BC6748, 0xE71FFD60D0B20EF7, 0xF551BE51C67BB198, 0x26A13664D0543D4D],
        [0x29522D3B13A339EE, 0x855225506CD89529, 0xDFEA3AD4ACF4F0F1, 0x49D76BBA7942742E],
        [0x14FA42338D56E61D, 0x191D3946C351299A, 0x247D576DA7ADB185, 0x4E1FAFE3A8FCEDC2],
    ),
    pa(
        [0x15E7053D236A044C, 0x3CDDBCB13B8D87E3, 0x519960D2D321A828, 0x4E559A0F0FC5BBA4],
        [0xFE00E8769C12701C, 0x95DCDC0A039C3B5F, 0xC169454B0C02EB1B, 0x727021D35F87530C],
        [0xA571040727DF241E, 0xDF45EFAAB2900D36, 0xFE6EDB5C60A69ADE, 0x64FCB73007BBC01D],
    ),
    pa(
        [0x38EF58CC6FD390CA, 0xEF786575171A98FC, 0x8850B78FC442D65F, 0x6F34C66D6FD086EF],
        [0x93F3CBB43898DC04, 0x0791FFB24307B727, 0xD7BD8096CE34981D, 0x0B598B8E8B849F6D],
        [0x11CFC18A0CC2F689, 0x81114607B529CE2A, 0x0A9BC046C00B5940, 0x412128B0B1AC66C8],
    ),
    pa(
        [0xA66DCC9DC80C1AC0, 0x97A05CF41B38A436, 0xA7EBF3BE95DBD7C6, 0x7DA0B8F68D7E7DAB],
        [0xEF782014385675A6, 0xA2649F30AAFDA9E8, 0x4CD1EB505CDFA8CB, 0x46115ABA1D4DC0B3],
        [0xD40F1953C3B5DA76, 0x1DAC6F7321119E9B, 0x03CC6021FEB25960, 0x5A5F887E83674B4B],
    ),
    pa(
        [0x0A8D60180CA2C1F4, 0x815EB0DBCC68DF40, 0xD7E67A47B82F4E99, 0x45A02890607F15C0],
        [0xFEF366D1FD41F184, 0x8B694A1101CFE11E, 0x4B39E15E0150A74D, 0x4013F03D6AD351BA],
        [0xBD0282DC6EE065CC, 0x36B994FD224AE646, 0x534E9AD8FEBCE874, 0x482255C1D9F06E4F],
    ),
    pa(
        [0x3C03EACF71CEF800, 0x90367544CA8AFEBB, 0x383FEA286A29C477, 0x4E8593B0BC655462],
        [0x12DE114AA3E5638C, 0xBA2A4AA929C4F20D, 0x56B0D29D7B8B13A3, 0x6BB91A497B9B7944],
        [0x2A49E646C5E7D206, 0xB13EF9CD9263C445, 0x50AB6CE8EDAB529E, 0x20CF7D79B0EBE39B],
    ),
    pa(
        [0xCBD28F4E8AE75C48, 0x3CDE029144000B60, 0x373BB9C898BC2170, 0x7C1188539F570886],
        [0x7DB4939DF0FE7DCA, 0xF50EB90FCBA951CE, 0x098BE61C357E1D1D, 0x023562378899469D],
        [0x20F6EFFAE15A4C03, 0x2F470A943C778E05, 0x79F50A03FC99DE67, 0x38D20188D1061483],
    ),
    pa(
        [0x23E811AD0E6315DF, 0x0B650D05E2AEB290, 0xB7BA0F59A75D586C, 0x043EEDD45E1F4DEE],
        [0xF6C147F2C7073217, 0xC651B919F3AFD20C, 0x258FDBFD7041F802, 0x173C4FA94F45073E],
        [0x3D71EA60928DF9C4, 0x5B7E78063373562D, 0xD9B0514CA29552B2, 0x1E2A7024993CC472],
    ),
    pa(
        [0x601A0FBCD45C811F, 0x24B7BC7D92EC0803, 0xA0CAE62B17D2407F, 0x5FCB43EE06225B26],
        [0x310509B93509FBA4, 0x0D8DB37605631B75, 0x97DECCBA52401C87, 0x044649F411B2E773],
        [0x0C0D24AD9598215F, 0x1B7F9026CC36628C, 0x338E2F557016DCEA, 0x0C8A1BFA5CC0E58F],
    ),
    pa(
        [0x8DE703B5681D104C, 0x3D2F7A591263CB45, 0xAE710C171CE56C63, 0x6B857C7EFCC3E6CA],
        [0x79D256B48B2801C0, 0x7E9FBEAC3C400FC4, 0xA751AB1D4733BA41, 0x09DE2BF5DD418ACA],
        [0x3BF10FF3EFF0687F, 0x5EBAEA34F1E37BA2, 0xE49E61261D66034D, 0x5B466E2AC3B242CA],
    ),
    pa(
        [0x137EEB6747FBB842, 0x79DF5C7560811A8B, 0x5A2BA76F71F8C89A, 0x09952A563BC8FFC2],
        [0xA2A8CB4BDC7EF83C, 0x96B5C6FA5F93C226, 0xD4EBEB1B0664E3A5, 0x409B4ADCE5C6CF2F],
        [0x44D53DB9834350C4, 0x89299305A5F505B4, 0xFB22FAA25949FF2F, 0x69B968A704657D64],
    ),
];

/// Distribution-time blinding constant: a masking scalar held as `ℓ − bl`
/// together with `bl·B` in precomputed-projective form.
///
/// Fresh runtime blinding contexts are themselves created under this
/// constant, so a new masking scalar never passes through unblinded
/// arithmetic. Regenerate the pair when building a hardened distribution;
/// the contract is a random scalar plus that scalar times the base point.
pub(crate) struct BakedBlinding {
    pub(crate) bl: [u64; 4],
    pub(crate) bp: CachedPoint,
}

pub(crate) const CUSTOM_BLINDING: BakedBlinding = BakedBlinding {
    bl: [0x58B262BC8869B072, 0x39608B4FE32D3A61, 0xC9CE33049D89ECB9, 0x0871ADF448F0B76F],
    bp: CachedPoint {
        ypx: FieldElement([
            0x7E925BF00AA28C78,
            0xC5BCA23AEA304262,
            0xA5B282D3D0AE1AD1,
            0x12D645C50B63B8F7,
        ]),
        ymx: FieldElement([
            0xB4C60821036F96C2,
            0x54D922F111AA73FC,
            0x944898BB01CB7AD7,
            0xF3CB170FC1B70616,
        ]),
        t2d: FieldElement([
            0x5BBA27EC6ED30222,
            0xE88287821012744C,
            0x762F4EB9B1224A21,
            0x3798991CC0A604F9,
        ]),
        z2: FieldElement([
            0xCBC9AE70189C6DA2,
            0x7270BB46ED9B1B36,
            0x8BB3E371620CA91F,
            0x67DA9D45DC5E859A,
        ]),
    },
};
