//! Known-answer vectors shared by unit, integration and scanner tests
//!
//! IVK and `pk_d` vectors come from the published Sapling ZIP-32 and note
//! encryption test vectors. [`PUBLISHED_NOTE_VECTORS`] is the published
//! `sapling_note_encryption` set (legacy `0x01` plaintexts). The
//! [`NOTE_VECTORS`] outputs cover ZIP-212 and non-canonical `rcm` cases and
//! encrypt to the first `pk_d` vector's recipient.

#![allow(missing_docs)]

/// `(ak, nk) -> ivk`
pub struct IvkVector {
    pub ak: &'static str,
    pub nk: &'static str,
    pub ivk: &'static str,
}

/// `(ivk, d) -> pk_d`
pub struct AddressVector {
    pub ivk: &'static str,
    pub d: &'static str,
    pub pk_d: &'static str,
}

/// A full Sapling output and the note it carries
pub struct NoteVector {
    pub version: u8,
    pub value: u64,
    /// Bytes 20..52 of the note plaintext
    pub rseed_field: &'static str,
    /// Effective `rcm` after reduction
    pub rcm: &'static str,
    pub esk: &'static str,
    pub memo: &'static str,
    pub cv: &'static str,
    pub cmu: &'static str,
    pub epk: &'static str,
    pub enc_ciphertext: &'static str,
    pub out_ciphertext: &'static str,
    /// `cv || cmu || epk || enc_ciphertext || out_ciphertext || zkproof`
    pub output: &'static str,
}

pub const IVK_VECTORS: &[IvkVector] = &[
    IvkVector {
        ak: "93442e5feffbff16e7217202dc7306729ffffe85af5683bce2642e3eeb5d3871",
        nk: "dce8e7edece04b8950417f85ba57691b783c45b1a27422db1693dceb67b10106",
        ivk: "4847a130e799d3dbea36a1c16467d621fb2d80e30b3b1d1a426893415dad6601",
    },
    IvkVector {
        ak: "dc14b514d3a92594c21925af2f7765a547b30e73fa7b700ea1bff2e5efaaa88b",
        nk: "6152eb7fdb252779ddcb95d217ea4b6fd34036e9adadb3b5c9cbeceb41ba452a",
        ivk: "155a8ee205d3872d12f8a3e639914633c23cde1f30ed5051e52130b1d0104c06",
    },
    IvkVector {
        ak: "a6c5925a0f85fa4f1e405e3a4970d0c4a4b4814438f4e9d4520e20f7fdcf3841",
        nk: "304e305916216beb7b654d8aae50ecd188fcb384bc36c00c664f307725e2ee11",
        ivk: "a2a13c1e38b45984445803e430a683c90bb2e14d4c8692ff253a6484dd9bb504",
    },
    IvkVector {
        ak: "b185c57b509c2536c4f2d326d766c8fab25447de5375a9328d649ddabd97a6a3",
        nk: "db88049e02d207568afc42e07db2abed500b2701c01bbff36399764b81c0664f",
        ivk: "b0a5f337232f2c3dac70c2a410fa561fc45d8cc59cda246d31c8b1715a57d900",
    },
];

pub const ADDRESS_VECTORS: &[AddressVector] = &[
    AddressVector {
        ivk: "b70b7cd0ed03cbdfd7ada9502ee245b13e569d54a5719d2daa0f5f1451479204",
        d: "f19d9b797e39f337445839",
        pk_d: "db4cd2b0aac4f7eb8ca131f16567c445a9555126d3c29f14e3d776e841ae7415",
    },
    AddressVector {
        ivk: "c518384466b26988b5109067418d192d9d6bd0d9232205d77418c240fc68a406",
        d: "aef180f6e34e354b888f81",
        pk_d: "a6b13ea336ddb7a67bb09a0e68e9d3cfb39210831ea3a296ba09a922060fd38b",
    },
    AddressVector {
        ivk: "471c24a3dc8730e75036c0a95f3e2f7dd1be6fb93ad29592203def3041954505",
        d: "7599f0bf9b57cd2dc299b6",
        pk_d: "66141739514b28f05def8a18eeee5eed4d44c6225c3c65d88dd9907708012f5a",
    },
    AddressVector {
        ivk: "636aa964bfc23ce4b1fcf7dfc99179ddc406ff55400c9295acfc14f031c72600",
        d: "1b81614f1dadea0f8d0a58",
        pk_d: "25eb55fccf761fc64e85a588efe6ead7832fb1f0f7a83165895bdff942925f5c",
    },
    AddressVector {
        ivk: "67fa2bf7c67d4658243c317c0cb41fd32064dfd3709fe0dcb724f14bb01a1d04",
        d: "fcfb68a40d4bc6a04b09c4",
        pk_d: "8b2a337f03622c24ff381d4c546f6977f90522e92fde44c9d1bb099714b9db2b",
    },
    AddressVector {
        ivk: "ea3f1d80e4307ca73b9f37801f91fba810cc41d279fc29f564235654a2178e03",
        d: "eb519882ad1e5cc654cd59",
        pk_d: "6b27daccb5a8207f532d10ca238f9786648a11b5966e51a2f7d89e15d29b8fdf",
    },
    AddressVector {
        ivk: "b5c5894943956933c0e5c12d311fc12cba58354b5c389edc03da55084f74c205",
        d: "bebb0fb46b8aaff89040f6",
        pk_d: "d11da01f0b43bdd5288d32385b8771d223493c69802544043f77cf1d71c1cb8c",
    },
    AddressVector {
        ivk: "8716c82880e13683e1bb059dd06c80c90134a96d5afca8aac2bbf68bb05f8402",
        d: "ad6e2e185a3100e3a6a8b3",
        pk_d: "32cb2806b882f1368b0d4a898f72c4c8f728132cc12456946e7f4cb0fb058da9",
    },
    AddressVector {
        ivk: "99c9b4b84f4b4e350f787d1cf7051d50ecc34b1a5b20d2d2139b4af1f160e001",
        d: "21c90e1c658b3efe86af58",
        pk_d: "9e64174b4ab981405c323b5e12475945a46d4fedf8060828041cd20e62fd2cef",
    },
    AddressVector {
        ivk: "db95ea8bd9f93d41b5ab2bebc91a38edd527083e2a6ef9f3c29702d5ff89ed00",
        d: "233c4ab886a55e3ba374c0",
        pk_d: "b68e9ee0c0678d7b3036931c831a25255f7ee487385a30316e15f6482b874fda",
    },
];

/// Exported extended full viewing key
pub const EXTENDED_FVK: &str = concat!(
    "zxviews1qd2akd49qqqqpq8qk0nys3ypxvk7kvqk4072tmcqawpu2y53h957apqj0w5t0495",
    "uztm5uper74hqk6tl8ehtgq3yflnxy70yql0y6skeuegyuam39a62wxwk2dvya9fnjvpcclk",
    "xuxdf8s88lumz5xfzwpp0dkl5s2vmqq2rhjgyeyxj2aea0v3n7l6vtr6y7z3q3r22dafkxjn",
    "chst3ckwfzqly8kjhdqq37hlsq0qmevkfgpcyktfentzcmm37sekpvhamd9gfkseqhqpu",
);

pub const EXTENDED_FVK_AK: &str = "97ba70391fab705b4bf9f375a011227f3313cf203ef26a16cf328273bb897ba5";
pub const EXTENDED_FVK_NK: &str = "38ceb29ac274a99c981c63f6370cd49e073ff9b150c9138217b6dfa414cd800a";
pub const EXTENDED_FVK_OVK: &str = "1de482648692bb9ebd919fbfa62c7a278510446a537a9b1a53c5e0b8e2ce4881";
pub const EXTENDED_FVK_DK: &str = "f21ed2bb4008faff801e0de5964a03825969ccd62c6f71f43360b2fddb4a84da";
pub const EXTENDED_FVK_CHAIN_CODE: &str =
    "e0b3e6484481332deb3016abfca5ef00eb83c51291b969ee84127ba8b7d4b4e0";
pub const EXTENDED_FVK_IVK: &str = "57b0e49c5fbf09f3d5d31707ca472db2a42f89fd6ff55aec353efaa583019406";

/// Mainnet address owned by [`EXTENDED_FVK`]
pub const EXTENDED_FVK_ADDRESS: &str =
    "zs1u57078s4klas8m2aszn8uzgdrsd3yl2x7v5s7hzm3ypzckcf7a3ux2pqj00vsk94nxy7gy72498";
pub const EXTENDED_FVK_ADDRESS_D: &str = "e53cff1e15b7fb03ed5d80";
pub const EXTENDED_FVK_ADDRESS_PK_D: &str =
    "a67e090d1c1b127d46f3290f5c5b89022c5b09f763c3282093dec858b59989e4";

/// Recipient of every [`NOTE_VECTORS`] entry
pub const NOTE_IVK: &str = "b70b7cd0ed03cbdfd7ada9502ee245b13e569d54a5719d2daa0f5f1451479204";
pub const NOTE_D: &str = "f19d9b797e39f337445839";
pub const NOTE_G_D: &str = "3a71e348169e0cedbc4f3633a260d0e785ea8f8927ce4501cef3216ed075cea2";
pub const NOTE_PK_D: &str = "db4cd2b0aac4f7eb8ca131f16567c445a9555126d3c29f14e3d776e841ae7415";
/// Sender's outgoing viewing key for every [`NOTE_VECTORS`] entry
pub const NOTE_OVK: &str = "404142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f";

/// Index into [`NOTE_VECTORS`] of the legacy note whose `rcm` encoding is `r + 5`
pub const NON_CANONICAL_RCM_VECTOR: usize = 2;

pub const NOTE_VECTORS: &[NoteVector] = &[
    NoteVector {
        version: 2,
        value: 100000000,
        rseed_field: "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20",
        rcm: "96b49ef5ab86a5d8b3dbe4278c53b64563be6108bef7475464eb4a943a818a00",
        esk: "e424431c75d7d2b71d6a93fe1e73c4276e551fc875aa669a0fcb5f692b71290e",
        memo: concat!(
            "5361706c696e67206e6f746520666f7220746865207363616e6e657220746573",
            "74",
        ),
        cv: "923fc0e6bb3b8ce4a324a385c9f37b7abe548b881831fc6ad49ce66909c4e0ef",
        cmu: "dcc75d0dc7f79f8e0af0f5e388dcaed555fedde2c9afc37f7c04ef101f89f85d",
        epk: "70e18a490d03e021147f12bb626ad2977078a44b6ea5ba6bcd91b6b195c0b16f",
        enc_ciphertext: concat!(
            "d9223a4cc9bf5ce4ef6125fd89f60b7da31dc47cd49b582cd78f21e580c149d9",
            "5dc8e99f1b712d527ccd68d485fb1656666475e83f3b7aabb8f5509921d80d66",
            "99218d69f8f5b9546ed4f91b74e113d26b2eacf40daf2d73a08a34911b2260fe",
            "1ec78b2e84242351ed069561e42ec44c809c9cc1e4e13eb4f347a67df79b437c",
            "335b56bf9ff8a105666385d50412913c4b858c7ac12ef7794473f59f7524ef90",
            "b6603707754b7036f47e568d009ab5714e8fca3b81ebfc50023f76d9493c99be",
            "ac6fc3638ca5198277a5a99131944066e4b52584bc39afe0a7e559c90f1193b6",
            "5e42c8fef89ae15ebbd74d1b5409f52cab803bd106634e4a2767a9725e52b94c",
            "440697d9ed685a4c168943b8d009e1793ae1fd9323d6887311746075e3312b45",
            "d0e571db3d66007c0f9af77594994955770a1e2ab5aa717f490f515d42cf0d10",
            "a0f46778b2846de9d0cd6a34f67dd5ba0626525e90d30a0d0265f16aa5952972",
            "28588a088386661fdc1b6223468cd106e719b610340ffb9bfaafa2774452b1ed",
            "a7a4cc5e26a43a33912ebdd61a2f4a47aa1d89bc63dbb489ce50bcdab5353cb0",
            "5a6e682425107a842be6ccb5c386158d848fb4f94f1e87afc1a859d129ffca09",
            "5246fe361560de864c814fbb9579bf22c459b3da6c19fbd484723c3a26195689",
            "55d677ca0dd63010a86352fc3ba7b62ede7d38e9318aefffda14287acc1a03e4",
            "006d8b38fe3ebbb6283edce7388d3b8cacda86212e5b57f06932230ec45234d4",
            "30aa63982eb824f370879d57415a0a2e65a2ad293651ce9fd46464a256dbbbea",
            "f0807c1a",
        ),
        out_ciphertext: concat!(
            "12043da10b37217762ceca3ab2195caf5079a44482b921a6cd981d35c474a81b",
            "d126118a8b5668cc8af323f46edf51c351c222c9d579ebcc6bf96c5a775d6cff",
            "348d7d49d9ab4097c0f2eab20109f0de",
        ),
        output: concat!(
            "923fc0e6bb3b8ce4a324a385c9f37b7abe548b881831fc6ad49ce66909c4e0ef",
            "dcc75d0dc7f79f8e0af0f5e388dcaed555fedde2c9afc37f7c04ef101f89f85d",
            "70e18a490d03e021147f12bb626ad2977078a44b6ea5ba6bcd91b6b195c0b16f",
            "d9223a4cc9bf5ce4ef6125fd89f60b7da31dc47cd49b582cd78f21e580c149d9",
            "5dc8e99f1b712d527ccd68d485fb1656666475e83f3b7aabb8f5509921d80d66",
            "99218d69f8f5b9546ed4f91b74e113d26b2eacf40daf2d73a08a34911b2260fe",
            "1ec78b2e84242351ed069561e42ec44c809c9cc1e4e13eb4f347a67df79b437c",
            "335b56bf9ff8a105666385d50412913c4b858c7ac12ef7794473f59f7524ef90",
            "b6603707754b7036f47e568d009ab5714e8fca3b81ebfc50023f76d9493c99be",
            "ac6fc3638ca5198277a5a99131944066e4b52584bc39afe0a7e559c90f1193b6",
            "5e42c8fef89ae15ebbd74d1b5409f52cab803bd106634e4a2767a9725e52b94c",
            "440697d9ed685a4c168943b8d009e1793ae1fd9323d6887311746075e3312b45",
            "d0e571db3d66007c0f9af77594994955770a1e2ab5aa717f490f515d42cf0d10",
            "a0f46778b2846de9d0cd6a34f67dd5ba0626525e90d30a0d0265f16aa5952972",
            "28588a088386661fdc1b6223468cd106e719b610340ffb9bfaafa2774452b1ed",
            "a7a4cc5e26a43a33912ebdd61a2f4a47aa1d89bc63dbb489ce50bcdab5353cb0",
            "5a6e682425107a842be6ccb5c386158d848fb4f94f1e87afc1a859d129ffca09",
            "5246fe361560de864c814fbb9579bf22c459b3da6c19fbd484723c3a26195689",
            "55d677ca0dd63010a86352fc3ba7b62ede7d38e9318aefffda14287acc1a03e4",
            "006d8b38fe3ebbb6283edce7388d3b8cacda86212e5b57f06932230ec45234d4",
            "30aa63982eb824f370879d57415a0a2e65a2ad293651ce9fd46464a256dbbbea",
            "f0807c1a12043da10b37217762ceca3ab2195caf5079a44482b921a6cd981d35",
            "c474a81bd126118a8b5668cc8af323f46edf51c351c222c9d579ebcc6bf96c5a",
            "775d6cff348d7d49d9ab4097c0f2eab20109f0de00070e151c232a31383f464d",
            "545b626970777e858c939aa1a8afb6bdc4cbd2d9e0e7eef5fc030a11181f262d",
            "343b424950575e656c737a81888f969da4abb2b9c0c7ced5dce3eaf1f8ff060d",
            "141b222930373e454c535a61686f767d848b9299a0a7aeb5bcc3cad1d8dfe6ed",
            "f4fb020910171e252c333a41484f565d646b727980878e959ca3aab1b8bfc6cd",
            "d4dbe2e9f0f7fe050c131a21282f363d444b525960676e757c838a91989fa6ad",
            "b4bbc2c9d0d7dee5ecf3fa01080f161d242b3239",
        ),
    },
    NoteVector {
        version: 1,
        value: 42,
        rseed_field: "214487a9cbed0f32230000000000000000000000000000000000000000000000",
        rcm: "214487a9cbed0f32230000000000000000000000000000000000000000000000",
        esk: "dd81077863632914000000000000000000000000000000000000000000000000",
        memo: "f6",
        cv: "923fc0e6bb3b8ce4a324a385c9f37b7abe548b881831fc6ad49ce66909c4e0ef",
        cmu: "8b129d57073e1cf3e4ac26f885438ff69b98b03d05cd9703cef27b006d2e3330",
        epk: "07e81391301f32d73bda742f0c59adb4f3055f3b9873ccbe308c09f71bafa4c7",
        enc_ciphertext: concat!(
            "e1cdf3c7d6fee9299e7d1f379829300b887a775bb099ae9c5bf2629380ebb25e",
            "d884569668c53f9fc3855083a249a44b4a4bf1e7307501c41007789050c08ce3",
            "2f77163e96c64e642a6484e99161d2c63d9768bdad0233ee97f49823c830d8f7",
            "18566168d99b36cac2e6df309b9d69a49cf8c0c0aa176881ffa6067369c18e05",
            "360c5accd8717f54b5c048393390475605239f76395e7779ed26dbd4f7810d6b",
            "c658daec5ab8467f7b3ecc0a3d177bf7494698b37092d33f75de58c50101a9f4",
            "7bfa515b4c44d5036930a8dcc2a5db99eef3b94c9552f887de34f4b768782349",
            "c9291ec91fc9da1c3e712c120a18b91dba0b80af329b2ec4bf3f7c6c42aec939",
            "d058c3d7a4f514e24b7894149cd785b07225357f0186db8e4f629a33a6beeec9",
            "1ea5ce3edda04da89adb9e349c424bc88df9121831ffc2ca7f9e0cb22dd6f4a8",
            "39e9558529a26aa64f1b2c2d7ba32cc0b83bb348a1dc56b9e016af1342056dc5",
            "44146d375682a3f26cd65e1e4b68f21acd1f1d7c363798d892cae2934565310d",
            "b8841da88673f8282c774335b2f7d4aa96cd7492a5bb92ba92b1c77dd6fa67c2",
            "e62ca291b02d6dbf29e677fa0f40b851afefa955823f2b1720da57595b7b8b71",
            "7075213356f24dc6df0902681c8ef1ffc08f60684a7f219e38922af0bdb8a755",
            "7c255f96014d8a14a2742acb000a0cd6fec20d1014f188abf0d29dd215c400f8",
            "4d41a002db2453c112c301449f31e5dd3bc56cafe634498ff5a24bee7fcc8202",
            "c5554cd91305bb2896db722cf268bcae7bac36db184ea693023702ea6f1dcc49",
            "768aed4a",
        ),
        out_ciphertext: concat!(
            "5f307bafc48eb7e93e670cb6f28ba71d97763ec99c6a5019a72210c49b78ff13",
            "3435b2944c7c2aed0ea96b22606c2183af2ac9bf50a4271386ed98a623b90653",
            "c058be5ce4e6024a3ed45801fc2cabb7",
        ),
        output: concat!(
            "923fc0e6bb3b8ce4a324a385c9f37b7abe548b881831fc6ad49ce66909c4e0ef",
            "8b129d57073e1cf3e4ac26f885438ff69b98b03d05cd9703cef27b006d2e3330",
            "07e81391301f32d73bda742f0c59adb4f3055f3b9873ccbe308c09f71bafa4c7",
            "e1cdf3c7d6fee9299e7d1f379829300b887a775bb099ae9c5bf2629380ebb25e",
            "d884569668c53f9fc3855083a249a44b4a4bf1e7307501c41007789050c08ce3",
            "2f77163e96c64e642a6484e99161d2c63d9768bdad0233ee97f49823c830d8f7",
            "18566168d99b36cac2e6df309b9d69a49cf8c0c0aa176881ffa6067369c18e05",
            "360c5accd8717f54b5c048393390475605239f76395e7779ed26dbd4f7810d6b",
            "c658daec5ab8467f7b3ecc0a3d177bf7494698b37092d33f75de58c50101a9f4",
            "7bfa515b4c44d5036930a8dcc2a5db99eef3b94c9552f887de34f4b768782349",
            "c9291ec91fc9da1c3e712c120a18b91dba0b80af329b2ec4bf3f7c6c42aec939",
            "d058c3d7a4f514e24b7894149cd785b07225357f0186db8e4f629a33a6beeec9",
            "1ea5ce3edda04da89adb9e349c424bc88df9121831ffc2ca7f9e0cb22dd6f4a8",
            "39e9558529a26aa64f1b2c2d7ba32cc0b83bb348a1dc56b9e016af1342056dc5",
            "44146d375682a3f26cd65e1e4b68f21acd1f1d7c363798d892cae2934565310d",
            "b8841da88673f8282c774335b2f7d4aa96cd7492a5bb92ba92b1c77dd6fa67c2",
            "e62ca291b02d6dbf29e677fa0f40b851afefa955823f2b1720da57595b7b8b71",
            "7075213356f24dc6df0902681c8ef1ffc08f60684a7f219e38922af0bdb8a755",
            "7c255f96014d8a14a2742acb000a0cd6fec20d1014f188abf0d29dd215c400f8",
            "4d41a002db2453c112c301449f31e5dd3bc56cafe634498ff5a24bee7fcc8202",
            "c5554cd91305bb2896db722cf268bcae7bac36db184ea693023702ea6f1dcc49",
            "768aed4a5f307bafc48eb7e93e670cb6f28ba71d97763ec99c6a5019a72210c4",
            "9b78ff133435b2944c7c2aed0ea96b22606c2183af2ac9bf50a4271386ed98a6",
            "23b90653c058be5ce4e6024a3ed45801fc2cabb700070e151c232a31383f464d",
            "545b626970777e858c939aa1a8afb6bdc4cbd2d9e0e7eef5fc030a11181f262d",
            "343b424950575e656c737a81888f969da4abb2b9c0c7ced5dce3eaf1f8ff060d",
            "141b222930373e454c535a61686f767d848b9299a0a7aeb5bcc3cad1d8dfe6ed",
            "f4fb020910171e252c333a41484f565d646b727980878e959ca3aab1b8bfc6cd",
            "d4dbe2e9f0f7fe050c131a21282f363d444b525960676e757c838a91989fa6ad",
            "b4bbc2c9d0d7dee5ecf3fa01080f161d242b3239",
        ),
    },
    NoteVector {
        version: 1,
        value: 7,
        rseed_field: "bc2cf7d65e0e97d08210c8cc932068a6003b3401013b6706a9af3365eab47d0e",
        rcm: "0500000000000000000000000000000000000000000000000000000000000000",
        esk: "b112f47e5fdab40d000000000000000000000000000000000000000000000000",
        memo: "f6",
        cv: "923fc0e6bb3b8ce4a324a385c9f37b7abe548b881831fc6ad49ce66909c4e0ef",
        cmu: "88373c4d9ddbb50f6b4bc28fba0f2392084deae8c6225251ba96a1c2d4e6b637",
        epk: "2fbcb9e5b78ecc80bc3dd86f58aeab14f42485491aee3b143cf50995145bdf64",
        enc_ciphertext: concat!(
            "6fa992bc78569f889d443c935537815dae8c1ed00100a2a6c6d5ac507e21cb77",
            "6f59759a1cdf5f2cd4f3f49adfc22ad3a5e033cc0d79ed8300a733af335ce576",
            "b0465746e155e89c117236a4ef5328a036cd026e86088202f9d437ce95d62bff",
            "4361f4b370e54044c6899023882562e997d6d997a4b6939f3773f97d8c1f6104",
            "f48840d4946a152b3d0fbd3589d06862630479d5e936e059423955b946ce2157",
            "03cc537bc6ae096cb6e713420bbfabb78336003d730572ac12ff07f2ebae2d93",
            "308a34e8966c20ff648c11d716b7b70e74e0adb0a091022255f2ad1c9894e6c5",
            "055721a9675e906bd5d835c1c22960e0d766fa06a5c07f4e25007378af2a8a44",
            "41b5f3b3b79fe6b916d91a82615e142082ccb0466df25cc47f833ce6198962c7",
            "b813d572e5e48053b9bddf113a5496a791878cf3b6965374f3e3c304e68c9df9",
            "0dc57825b3aff6b0fd06427ede43887c83606c7478e5a84fce94f44a1d5d1128",
            "0d364b04d4e09e8889c78f4cebb7b45d48881f783f886037dbb4a28db168efeb",
            "037a813a19509412454fe68c60c96612e3bf1c635b87605962700d350c961fd8",
            "54183ca871632a5c1b4aa49870fc0b48bfffd7c5c5e48c2b1c6d88694acefa4f",
            "bb126e5ca1e20dd98cecf99f0d8f5dc253c5bd27c56a181f62e1bcac748536ae",
            "081ec8764f875a6280d3c1b92b73bf16323e9d36869fc8882d035769301b6837",
            "3a8f760f85ab29e07928fdee3fb85dda2a87335d40003b5486d5e1aee78d5bef",
            "fe999084aea23ada09c2ea8240bb49e39d66f0095f574238ff82480780695025",
            "42fadfc5",
        ),
        out_ciphertext: concat!(
            "3ade5dc54b9466a215937224b3e38b796d332b94776157a28ef2e24cee2f52a9",
            "d573e7864aba0cf581620b94f9c5c3ce06ffbe0971bae304ea852d7b837d72fb",
            "abc96b7f47b0c6d1ab1f8d244544ac0b",
        ),
        output: concat!(
            "923fc0e6bb3b8ce4a324a385c9f37b7abe548b881831fc6ad49ce66909c4e0ef",
            "88373c4d9ddbb50f6b4bc28fba0f2392084deae8c6225251ba96a1c2d4e6b637",
            "2fbcb9e5b78ecc80bc3dd86f58aeab14f42485491aee3b143cf50995145bdf64",
            "6fa992bc78569f889d443c935537815dae8c1ed00100a2a6c6d5ac507e21cb77",
            "6f59759a1cdf5f2cd4f3f49adfc22ad3a5e033cc0d79ed8300a733af335ce576",
            "b0465746e155e89c117236a4ef5328a036cd026e86088202f9d437ce95d62bff",
            "4361f4b370e54044c6899023882562e997d6d997a4b6939f3773f97d8c1f6104",
            "f48840d4946a152b3d0fbd3589d06862630479d5e936e059423955b946ce2157",
            "03cc537bc6ae096cb6e713420bbfabb78336003d730572ac12ff07f2ebae2d93",
            "308a34e8966c20ff648c11d716b7b70e74e0adb0a091022255f2ad1c9894e6c5",
            "055721a9675e906bd5d835c1c22960e0d766fa06a5c07f4e25007378af2a8a44",
            "41b5f3b3b79fe6b916d91a82615e142082ccb0466df25cc47f833ce6198962c7",
            "b813d572e5e48053b9bddf113a5496a791878cf3b6965374f3e3c304e68c9df9",
            "0dc57825b3aff6b0fd06427ede43887c83606c7478e5a84fce94f44a1d5d1128",
            "0d364b04d4e09e8889c78f4cebb7b45d48881f783f886037dbb4a28db168efeb",
            "037a813a19509412454fe68c60c96612e3bf1c635b87605962700d350c961fd8",
            "54183ca871632a5c1b4aa49870fc0b48bfffd7c5c5e48c2b1c6d88694acefa4f",
            "bb126e5ca1e20dd98cecf99f0d8f5dc253c5bd27c56a181f62e1bcac748536ae",
            "081ec8764f875a6280d3c1b92b73bf16323e9d36869fc8882d035769301b6837",
            "3a8f760f85ab29e07928fdee3fb85dda2a87335d40003b5486d5e1aee78d5bef",
            "fe999084aea23ada09c2ea8240bb49e39d66f0095f574238ff82480780695025",
            "42fadfc53ade5dc54b9466a215937224b3e38b796d332b94776157a28ef2e24c",
            "ee2f52a9d573e7864aba0cf581620b94f9c5c3ce06ffbe0971bae304ea852d7b",
            "837d72fbabc96b7f47b0c6d1ab1f8d244544ac0b00070e151c232a31383f464d",
            "545b626970777e858c939aa1a8afb6bdc4cbd2d9e0e7eef5fc030a11181f262d",
            "343b424950575e656c737a81888f969da4abb2b9c0c7ced5dce3eaf1f8ff060d",
            "141b222930373e454c535a61686f767d848b9299a0a7aeb5bcc3cad1d8dfe6ed",
            "f4fb020910171e252c333a41484f565d646b727980878e959ca3aab1b8bfc6cd",
            "d4dbe2e9f0f7fe050c131a21282f363d444b525960676e757c838a91989fa6ad",
            "b4bbc2c9d0d7dee5ecf3fa01080f161d242b3239",
        ),
    },
];

/// One entry of the published `sapling_note_encryption` vectors
///
/// `memo` is the non-zero prefix of the 512-byte memo.
pub struct PublishedNoteVector {
    pub ovk: &'static str,
    pub ivk: &'static str,
    pub default_d: &'static str,
    pub default_pk_d: &'static str,
    pub v: u64,
    pub rcm: &'static str,
    pub memo: &'static str,
    pub cv: &'static str,
    pub cmu: &'static str,
    pub esk: &'static str,
    pub epk: &'static str,
    pub c_enc: &'static str,
    pub c_out: &'static str,
}

impl PublishedNoteVector {
    /// Serialized output description carrying this note, with a zero proof
    pub fn output(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(948);
        for field in [self.cv, self.cmu, self.epk, self.c_enc, self.c_out] {
            out.extend_from_slice(&hex::decode(field).expect("vector hex"));
        }
        out.resize(948, 0);
        out
    }
}


pub const PUBLISHED_NOTE_VECTORS: &[PublishedNoteVector] = &[
    PublishedNoteVector {
        ovk: "98d16913d99b04177caba44f6e4d224e03b5ac031d7ce45e865138e1b996d63b",
        ivk: "b70b7cd0ed03cbdfd7ada9502ee245b13e569d54a5719d2daa0f5f1451479204",
        default_d: "f19d9b797e39f337445839",
        default_pk_d: "db4cd2b0aac4f7eb8ca131f16567c445a9555126d3c29f14e3d776e841ae7415",
        v: 100000000,
        rcm: "39176dac39ace4980ecc8d778e89860255ec3615060000000000000000000000",
        memo: "f6",
        cv: "a9cb0d137232ff8448d0f078b6814c66cb331b0f2d3d8a085bedba815f00a8db",
        cmu: "635572f572a8a1a0b7acbc0afc6d66f14a02efacde7bdf03443ed4c3e551d470",
        esk: "81c7b2171ff4415250cac01f5982fd8f49619d61ad78f6830b3c606145962a0e",
        epk: "ded68f05c658fcae5ae218646ff844406f84426784040d0bef2b09cb3848c4dc",
        c_enc: concat!(
            "8d6b27e7eff59bfba01d6588badd366ce59b4d5b0ef93bebcbf211417c56ae70",
            "0ae18244bac2fb6437db01f83dc149e2786ec4ec32c11b054a4c0e2bdbe34378",
            "8bb9c33ff42fae99323213e0963e6f976d6fffb8c9fcf5219574c7a94c0e72f6",
            "093aedafe380621b3ba815d2b97240f677d390f5fc5d45eeff16688e40b9eee8",
            "ee1d393b009750cb73df7a47fd07a28141db49bd9ccab1f18d0b6a55ed101ca1",
            "6f7345bcb0beaf7cd79a3d2bf288f1d88ebb1e4b742199d330c30a9fee1b44c6",
            "86a1ff5cc33d4627f83d61ce34d6f1344e2b11a5f7172442296075919005434a",
            "574ed4e4c98e238edd5367e8f57524b638dd2d5830e83f7f32080d2d51a08ae8",
            "4e37429c8438faae1540867b12ac2cf6a77da780d92cfa500c195a071ce8ae3f",
            "102ce09501ecdac08a7952a08d53f362d37b64948c9915cbfc9f2d3c4e8222d3",
            "9a348421447fabe4d5f087809a79e849b28dffbc97fbbf647ff34f79ff64e737",
            "ebf03d8add44c154325f2bff14c6e9e90b0f9889f325a926a3685641a7a219ec",
            "e6fb2b4deebf3109d7ee0f039dac427444993485848444ccafda5ea328740666",
            "dd75c323ce7b920ee0f3dc3abce6bd09c13c957c5ea8952827116bb5bd0e5c27",
            "f820f2cf72a5105d9555be1e1e5e68fffb7133dc3900194e3b731c7d391170ad",
            "6d4af13a78a06c25cfbb0d0991d5a883cff51cb6f591c792d99dcc559cde9b7b",
            "39c4f54a6bfb29f1f85e135d1733b49d5dd67018e62e8c1ab0c19a25418726cc",
            "f2f5e88b97692112924bda2fde7348bad7295241729db4f38711c7ea98c5d419",
            "7c66fd23",
        ),
        c_out: concat!(
            "0eb2b01be8880fc0469842271418b52bad4019892cde53eecacdb2e45f5f3375",
            "85f7f6175d888f6e2c4ed13571cd96fd177a01ab101908d7ca4a6d81d916622f",
            "5ff077b13f345590e227c10e0895e204",
        ),
    },
    PublishedNoteVector {
        ovk: "3b946210ce6d1b1692d7392ac84a8bc8f03b72723c7d36721b809a79c9d6e45b",
        ivk: "c518384466b26988b5109067418d192d9d6bd0d9232205d77418c240fc68a406",
        default_d: "aef180f6e34e354b888f81",
        default_pk_d: "a6b13ea336ddb7a67bb09a0e68e9d3cfb39210831ea3a296ba09a922060fd38b",
        v: 200000000,
        rcm: "478ba0ee6e1a75b600036f26f18b7015ab556beddf8b960238869f89dd804e06",
        memo: "f6",
        cv: "fc54319a39be49c0480c4df33b8f77ca673a42bfdedfb80ee46b8f70fc0dcd3d",
        cmu: "0c87417577480b6977ba92c55425d62b03b1e5f3c3829cac49bfe515ae722945",
        esk: "ad4ad62477c2c883c8babfed5d385b51abdcc698e936e78dc22671729155620b",
        epk: "f06cbaf8cb5c84823847a120104c85ad707228adba876c6d837efd414e1c1db4",
        c_enc: concat!(
            "8a3f60252f4df996392e55afee0722f124b1a134e8a1fb1eaa88889e6ad489cf",
            "1ba91255ee56fa1a09db7156c3551aed2969a6ff37f2a77a60b3ea4375faff04",
            "9e85c27221cc2ba989bd18ff9698000af1a7643f8785d65ebb04c85b2475df62",
            "5b47e3e9c7aca84c131723776bd8c29f9d1f5fd257e58f72b604f9b57b1c2d05",
            "31ebbb19cfc27368890d256e9aba308db9d8856f49d4663afe555072ed64c819",
            "8e6ad15c0c43bb168549a5be38c5b46dc12f0c2a961ff3cfe32a1c3efe80b15e",
            "37e4cebe2a7abe03eb17f4bbad2231cb5255e29cd03cb961332cf5e55e6053cd",
            "4065c3785606b2185f18c4a3a22623d259cd20dbe154c4af6b2bdcf3b9c0ff13",
            "ce27e39505a9f1b82f6fceeac095384717e8970ee029de964e804abd32d4da93",
            "bb8dc2b6bd6044d8dfd79df7207ea03bdf036fa6263f21bc1bfd4a6d9cb5f2d8",
            "bb6e74b6dd047ae1aab8c1a723b4787c54e253967fa9440b7361835065743503",
            "55269b2b66b748e88fe9b8d123e94b5fa5d072b8c39652e9202b16f165460e4b",
            "970f63ee7d638f48e49017ea641cd37009d44b7724182544db92bd0c4a7e9d93",
            "93d46fcb7bddf96f02cbf47fa0f52804098ecbbb7a13f3a2a5f1638e77f8a82f",
            "6c3decb7607f0951c57c7f2776042214f90a3b6e00ed16059dff4555bd471d78",
            "afe7aa3dc79141a0872d19c81c351caf54a2fc6de8fd7686c4f2c534efac7751",
            "5e30f2507ba0b23b1ee37ca908943dfef3809a7e9becf1b9691049f7876a592e",
            "e7ed64740f1be7e3066ef76f81470f4354331aa1bc49579699697782bb075cbf",
            "82d3a8c0",
        ),
        c_out: concat!(
            "882458302c0aba55ed8d6718ca26d8c28a127a01e77c2ae5bf15c69673918177",
            "f92477a218a7f6cf12178022c9ddc7185c18d0876c3c296583e0bc54793bf1e2",
            "6a854a41ab617f205271ba6c1429bdf4",
        ),
    },
    PublishedNoteVector {
        ovk: "8bf4390e28ddc95b8302c381d5810b84ba8e6096e5a76822774fd49f491e8f49",
        ivk: "471c24a3dc8730e75036c0a95f3e2f7dd1be6fb93ad29592203def3041954505",
        default_d: "7599f0bf9b57cd2dc299b6",
        default_pk_d: "66141739514b28f05def8a18eeee5eed4d44c6225c3c65d88dd9907708012f5a",
        v: 300000000,
        rcm: "147cf2b51b4c7c63cb77b99e8b783e5b5111db0a7ca04d6c014a1d7da83bae0a",
        memo: "f6",
        cv: "5cc9ea168e79ff0d083af421d32d27fba1c8a638c0c352cf59dcb1ca84c3fb1b",
        cmu: "b3b4e7ab080b9b0fe473cfc5a3105e9a062a4ee49edd7095a671637e0057242b",
        esk: "99aa10c05788081c0da7d879cd9543ec1892157292402e960b06995a08964c03",
        epk: "6a92026043fa930eeb2b28fd7bbdc5a70500beb84c671136238e5efdb017d99c",
        c_enc: concat!(
            "4cace52f2da82a34e30de8fb2e256befd92dd30ef78685a508e4410c79336f0a",
            "f1b264848233592478d22df791ab8d4c7d323cd84d6b2e4dcf66495b46c531a3",
            "216766fc8b6f65fe576c44ef88c444fa957fbd87af7a30f52bd3f2338cbb0b7e",
            "e6685c51ecefb5fd17d7530bb6145228bb976a56a1c9b2c8d2864c43d3cd640b",
            "d7e01f08aac416d2250df7f4b1b9ebd9bd103fd417fdbe57132eabfc52c3798e",
            "98c37c1af34d28912c1d1164b5277107c47d6bd5f3c0b30f4efab7ef04158e11",
            "9d7c40794ab0d4231949e7f80f43d7636456fee2e1272ea1e2ec3e8ff30698b8",
            "326471eba940950d5583624dfdabe87d7c52a4d00ef20042381c9e6f03d329bb",
            "f42043f2f3b4fd77541632402e0611b244b0c2803cd51250814cffdd7eeb1735",
            "beba8ea8a58ebcc323f424fcd5a73dcca2f506fca403199f0cc7b1e97b920ba2",
            "7235cd39e527382bad3a483b9f1ebbf29177ae94d8fa63beeb456d1278b9d228",
            "5944319904dde42adc7062b550b1ff47b70d3c78c24c55069f720fea6023f219",
            "4a7291ffb811f68a16d6c115f4d8c685e09a44da8411e1b9b53f39d51846147d",
            "db620898e080b7a65fe8e2e1312b0b8152138a8ba9e086679057179ff09f7b3c",
            "bf58bf59e33f83de2c70350ab57c82be9ec95ccc95e2be294ec5383fa3bbd7a7",
            "59315cc25dea3853e7b5366baae05aca8bc956f1d5bddcbda295a5ca7c2e26fb",
            "4e26f7ebdf6244b78a591efaa3a6f48cc4105978c968dd8588795a9a65711793",
            "f19804f8814b4a9db0bfa157769aafda2db0eef02b9a81163b7c235697620c72",
            "d824e32b",
        ),
        c_out: concat!(
            "9dcfab0d2054d2bdf406c31b4178465de6505db3be9b6936f78d2e2937579b58",
            "2e832861929a75178804b657126add742e06cb84368642db9bf47ac6e4dc1af1",
            "78198b22d6262345373b0f562ef27bb0",
        ),
    },
    PublishedNoteVector {
        ovk: "147678e0553b97829347647c5bc7dab4cc2202b54ec29fd31a3de6be0825fc5e",
        ivk: "636aa964bfc23ce4b1fcf7dfc99179ddc406ff55400c9295acfc14f031c72600",
        default_d: "1b81614f1dadea0f8d0a58",
        default_pk_d: "25eb55fccf761fc64e85a588efe6ead7832fb1f0f7a83165895bdff942925f5c",
        v: 400000000,
        rcm: "34a4b2a9144ff5ea54efee87cf901b5bed5e35d21fbbd788d5bd9d833e112804",
        memo: "f6",
        cv: "6d6ef8ce979274094f191aef643f3fcbd1ac9d98d607e2bcfef6fd51ba4bb4b9",
        cmu: "51fddd708cd151d3ca4717e3c99eeb8f64f104495f26de057b681063b9c9782d",
        esk: "bdde1381ec9ff421cafd1e31cc5de25559881f6b21b2175d0dce9408597ea103",
        epk: "04a10a3ea0e4b1a1d13a67bcb27de634e194b2080162619fbca7662d42b8a55f",
        c_enc: concat!(
            "9db8b24a056f996d392d4d963ea38976d0f35e85d8aa847a0896164e39d8697a",
            "e180c4dcc17061d5f399e0ac4ecb5f02d4d9a3ca5b33518c58b1a073bca7ee67",
            "41010305dbb8c7383835b9c780a942785c57a3098a81aef5d7061fdabacf5272",
            "1530ef32dffc011019ebd36097e84df20363cf1822b1150c2473582b01f8d867",
            "99c173f7fef8ca938e4cde7185a19d70ad3861479e7d43810dc5642471033349",
            "286baf714f7fdc22b381d9e3adf3bc1049878e186d532d8c9870f60180d65472",
            "455d22d25924b992c02f94ea6eaf75b9dc883de7376da6018e55451e23f238e1",
            "09a6400789f93052579bbb184019f309b3d06d0767a107e4b79a2bfc8425d8b0",
            "70627f2d55c9a26b22823a21e1caf6fbc2a57dce784b2530345a5f8b0cea3fce",
            "3b7ff4f5bb884f68b7d136069233ade4d6bddaf340dee14372332ec376f5935d",
            "6279c374911d9540facc75115b20c553329b43ee57a8bb58a3f74606a7f3fa87",
            "e46aaf72adae9048b943e4648985adaa990d7820fbb2b12465a1617d01caf414",
            "36a4946ea09596239640dc95e586819e6c0069eee07a7242b94afd69ce3543b8",
            "877b3194cdb9e707c0838b15434603575046352c1bf4cfc27f4edf6191d8ecf5",
            "52b8f698702d3a8f6fda58b5cf161fed6e6fdb149a79db0a6b02c327e9629c94",
            "8f665d13283f65e54be55ac1ae827535ff7ac143cc72d92bc4f46ef4ad88c766",
            "ab4bff1e1d115c851e598541105d6ebb367ce0549320a230835311478bdd9f6c",
            "538503f362e5f6c27d15b56c4143d45769c2546e53fb4501f9ba5ed455d24986",
            "b4dff7cd",
        ),
        c_out: concat!(
            "254f122cfe9498add757cf0b610da8cbaeda053e26cb72306f362308552853ff",
            "023c23c26f3ab441b81ea25ce0ae57d1a94983bb45ab8a86da68ef63f15816c1",
            "43327a1e460c510c631cc69f3960fb5a",
        ),
    },
    PublishedNoteVector {
        ovk: "1b6e75ece3ace8dba6a5410d9ad4755668e4b39585d635ec1da7c8dcfd5fc4ed",
        ivk: "67fa2bf7c67d4658243c317c0cb41fd32064dfd3709fe0dcb724f14bb01a1d04",
        default_d: "fcfb68a40d4bc6a04b09c4",
        default_pk_d: "8b2a337f03622c24ff381d4c546f6977f90522e92fde44c9d1bb099714b9db2b",
        v: 500000000,
        rcm: "e557851355747c09ac59013cbde85980964ec1844d9c6967ca0c029c8457bb04",
        memo: "f6",
        cv: "ce42f9d089ba9d9e62e3f6563362f0fdc7cede8ab359439e214e2652dbf05a0c",
        cmu: "c2b5f357117a4003629e05ca6f56a623a3c48aa5eb797cdd322d4857a0fba44e",
        esk: "3dc166d56a1d62f5a8d7551db5fd9313e8c7203d996af7d477083756d59af80d",
        epk: "5b54e5d413a807df36426d5c8c09810ac24595b152cd8941a2343c96303d246b",
        c_enc: concat!(
            "d7e706317c7895062d89ab5f1052155ac3d2a1e343973e5aab1cce5359c6bc11",
            "1b9a7bb668b6c7d021b1233577e82baf33005cd034a9754b1e12df036b7bc782",
            "9879ca8c6b54378fcd5f182f65160ea7243b7dfcacfb6dacee022634149d8fb2",
            "f0ca51a82672a563d536baf1af881a7a8d25c5cf78618953032ef565b0f398e3",
            "4bee2c3095a7bd0b7d097a3d264d6546d00c8583044378d1489404a31eeca88f",
            "8f42ebfb8218d49fded82a9ba6232ccc47945d6f7d6e39e0e83929341acf88db",
            "5a2773dc558a9dc11dcda1bab3cb21bf5c295183bf9a93ee025eb460f7d74120",
            "42ce5a843a790c3a94da2db7f612032fbf564efcf204afed0ff2ab2bc1b377ca",
            "410f127faf9876627fbdb2262ae6562308844800b5cd52743e7f7bcae3c7b270",
            "34c5f21d4fefb59bd23bc6ea0c3939871ab434b3a5cb7103851a2478c5f6138f",
            "8fd9913fa7af5a4aa20ef95940840bcd174ca3e1065aeaee5f6c7d94342c685f",
            "13a81e7b53ad42890ba8103ac834a4eb1f10b0a70e76891dbe18f580472f5bdc",
            "3fc9550f156b3121a844d6c77b224b8d04f1fe8ea7b988d878bfc06dac332a10",
            "6a6ead47f82bd8cb7c25ae9e1d75bb762afee34930f4a998f268d8763cae7b32",
            "15205e589c481113b5a4cdb209bece2f094f339f03fb39a16ef1672e008927fd",
            "97098e0012becaa00f62c6bfd945a016be8b1866d92b1d8588ae26c63570d7e2",
            "a6b2ee6ec2e6b0be2219380e4eea6af09bf585f28538d8b789326e6a3de3bf45",
            "068028ac80b192255f273364da88dc1a6f00e0cc32bb475eccbe097a69f6492b",
            "dba2adf0",
        ),
        c_out: concat!(
            "3bfc13673c24ac5eaf0bc2446c38a792ae42d96baf0553cee436b634b57389b3",
            "621ddbba22e684890a7b645d63c4bc8c26db54628cef4ded980f608f0020bbb5",
            "a2f65522a61f89df8218186704011e91",
        ),
    },
    PublishedNoteVector {
        ovk: "c6bc1f39f0d786314cb20bf9ab228540913555f970696b6d7c77bb332328372a",
        ivk: "ea3f1d80e4307ca73b9f37801f91fba810cc41d279fc29f564235654a2178e03",
        default_d: "eb519882ad1e5cc654cd59",
        default_pk_d: "6b27daccb5a8207f532d10ca238f9786648a11b5966e51a2f7d89e15d29b8fdf",
        v: 600000000,
        rcm: "68f06104606b0c5449845ff4c65f73e90f45ef5a43c9d74cb2c85cf56c94c002",
        memo: "f6",
        cv: "3027d7b74764caf72b7387289b128f439fd042c21d81364bc2ae7bd29eab5123",
        cmu: "382c7d688bdf34b94d401c41227952a2b931c57b005c82f2c36315f61c35024e",
        esk: "4e418c3c543d6bf0153174a04e8544ae7c58092a2e4e5d7d9c672a3a79110903",
        epk: "e0c29b435daedbc98d465f389b1b60d7dfac0e459b1e628fa0184e92f26479ca",
        c_enc: concat!(
            "3f926f4c93ff125bd1fa04c91ef59e071433f57c606ee1bc912d54628d140740",
            "a1ab8a34516adefbe648007f86f131f4993b99aebd18996348f4ec85341df335",
            "422b12618f63aa804b306c6c6b237a0c044f79033d028d13cf1f3d6e38acf390",
            "f554a8d4e464948fb5a7f98d161e3a8a157af4c894ca2da4647c5322354f2619",
            "fd6ccc3cabef0371ba422f3d6d9216996e49e693871c563ffbf4c6d1d1c4739f",
            "7326da4c66976184f0136496712a7eed56ea4ca1d0784c7fa2c556d6a9640b55",
            "45d2140ad745f1fcdab6b1f9ee59356bed249338a5c6c1c637ea9b779b8311a5",
            "323a15d61f1a0ffc7b2fc9e0be58c5fcbdbe57a2e4d3bf21845b9016541c8cb4",
            "4a59eca7f2b4183bfbbcda57eb5424e89dc3b06714e20edf7846d68a5f8a184a",
            "7f7c5a08fccc7984122e8c636303d03b52b51ec8cd976888976ac59fe4ebda53",
            "95538dbea3d0097be5546e1e0ab1ba4cbb47f6203dcab84b129c5299e3e99d65",
            "ebcbe40fd05b87369c30db293837dbd04e7a7108ab744b4fb3da1f8a7d2cba6a",
            "5f014f0d705ece119ae980e9993da3ddaa3bf1899a7474d60b72ed1e390dfe4a",
            "3a071acefb02ccca0ba9398c861bed45216179ee2a0853361c7dea89ac1cd7e2",
            "b4efa6ad8215f5f76ac28a731d2779c1ffebe9ab6f513d9b5ee008135ff60bb8",
            "6f8e139787c6c3468d31298f25917648f072a11c0b8af40f92a8b5042cd4af4f",
            "5a2a552731546190448df1078637f42e97545a86643aa41037c534bc3e2e44a8",
            "853410a06e9125318a965655f33fed8eba356293d7ccfb97a23320bc353970aa",
            "a118e743",
        ),
        c_out: concat!(
            "659def250834846f85eb9e395befe15e1d4d2ab4362d1aa7de84243f7445d5d2",
            "8f4792924d60c760533cef051047e54d521e2b072d1330b2685eb870106c661f",
            "1f07b76fdbb514aa9b94ad4191bc0d2d",
        ),
    },
    PublishedNoteVector {
        ovk: "f62c05e848a873ef885e12b08c5e7ca2f32424bacc754cb69750444d355f5106",
        ivk: "b5c5894943956933c0e5c12d311fc12cba58354b5c389edc03da55084f74c205",
        default_d: "bebb0fb46b8aaff89040f6",
        default_pk_d: "d11da01f0b43bdd5288d32385b8771d223493c69802544043f77cf1d71c1cb8c",
        v: 700000000,
        rcm: "49f90b47fd52fee7c1c81f0dcb5b74c3fb9b3e03976f8b7524eabad008892107",
        memo: "f6",
        cv: "770894c7a5458b167d8518a547bc62b46ba189807eb97c08284e1b92b6da352a",
        cmu: "0dd42d63ff38ee4c46651e4d1dd5227dc597339f7d704c518ef402f8cd6f3744",
        esk: "6da945d30381c2eed2b81d27086d2248e7c449fe509b38e276791189eabc4602",
        epk: "a52f0b5ae4a94fa88aa7cb7e5f0f343ca2fa66b39441ba662820e46a9bbba3b5",
        c_enc: concat!(
            "2077df432524614c076e7793024191aac9e493f5c8a98745ae65310cfcb57556",
            "4a93f1272bce900777b850497e84540cb192038565882fa4f371213eb5090041",
            "ffd9247bee2bb153212283b27e36e284603c0bc40c465fc6ab8f88985ef50e2a",
            "b0eb66a634309bb902c6cdd6a555b8c371489f57c7ea3b5437f287c74e35e034",
            "cc6808e2c9f2c973fac96e849d31de76f80663a582b23afc36455ec46e238cb2",
            "84daf1114a6e5bd0289aefb7469431b8b86089b9d36ffd6745bd867baa6b58fb",
            "30afa097ab9e57388f4fdfc0fd483dc67f02bc07990e1a397b112d5dbcf22f9b",
            "64f5f543102463e30f4681728539c0c5c5e00a2535aef768e3af7d47a08ddb99",
            "ea2ed00c52bf4b5eb3140585b0f90ecf7d215b4cc18af9aec8170c6db6c66998",
            "b8da0f0917f1380c87a4181b86c6cdfe6f2db22141e7984b1aacf7cec5e7d076",
            "aac5479ed71440b2d460185ba3dbea03c8fccac09aecd33a3fdda9a134ea42a1",
            "a978c4051799e6cc696f8a49400aead6652f93a258220c6338b9e73b10a01cd2",
            "ec3972861c7b62695adaa5414a787450e7a5f821e4f245dd972c0892e86fa126",
            "ba595c1225738e2f8be36f11dcc52ced4f7875df5bbbd83aec8d4313072d7ec9",
            "47af86b56b65fcb1bd32f0db0cb37deaa6cde0dfe4bdb809161eda034a949a3a",
            "039af9bbe09eafb35b7cd8b5328342c393221a4f134b15a4163c053b32eba85e",
            "593606da67a11ce174b77bbefd50ef1025e94a06c5e0988db7f9da540aa3b1c0",
            "3309b4b14001e2c45aa999650b01aa3bef5fb2d3380cbf33c55d4570259f1e3e",
            "d7e00ca9",
        ),
        c_out: concat!(
            "e772e01d6109b6f985b1772ed1550a947b35a84b3e71123331a3d61f1bf5964e",
            "97425442e5c8ef2b9d84ab3dcbab9c96fe6a89ce1d5e8a9b83b5090bb07c5045",
            "0bbbfc8a7464a77c33971633b21368f0",
        ),
    },
    PublishedNoteVector {
        ovk: "e9e0dc1ed311daed64bd74da5d94fe88a6ea414b7312de3d2a78f64632bbe373",
        ivk: "8716c82880e13683e1bb059dd06c80c90134a96d5afca8aac2bbf68bb05f8402",
        default_d: "ad6e2e185a3100e3a6a8b3",
        default_pk_d: "32cb2806b882f1368b0d4a898f72c4c8f728132cc12456946e7f4cb0fb058da9",
        v: 800000000,
        rcm: "5165aff22dd4ed56b4d81d1f171cc3d6432fed1bebf20a7beab12db142f94a0c",
        memo: "f6",
        cv: "2954cc7f9f9dfeb14f02eebff3f848d5d0e3d2e01febc91641f4126c6034330c",
        cmu: "0990cdb9a52e5cd1ba54d9204c26691cb036b130122126eb14129cdf0fc5183c",
        esk: "ab2aff0332d543fd1d8023185b8ecb5f22a29c32ef741633316eee514fc22309",
        epk: "d004997c79d007a53bf2fd2f6a66c0afd9f879b55fecdc158a901232b7884809",
        c_enc: concat!(
            "6d3eff728a288e3559d89606a450ce14864df90323cb2f41fba268843cec7775",
            "48bcc425f5ed1e6e8c75e2dae356168456391b87b5c6cd55503f12c34f94b0d8",
            "24a77ae6213ff43f12a34f2c668ea16bd1f04a91d39a7b60197c7b58629036a8",
            "8fa70a8d5bf83ed4db4063b1eace1095f90662ce9f6ac02673f7b9a36ebc52f4",
            "984bd71153b3e2edca803d869026ee2ff0228afa7b61d0d38c9bccb3008b32c6",
            "a059842ee8a07ba12c6308436b648985353d7dd58b2092b5ac2ed7e72065ecad",
            "a650aee6cd00fd34d58c2b58d41a48aac7bf4b45c96c53a10b04db73cc83271b",
            "a67117d642e4d819c302d7185eccbfa5405b80c5b3e4b2c552432860808178cb",
            "8fce405b73fef2b346c41bb2b2fad71a80313be3cf01ecfd888f2572edcf57e4",
            "d71e47cf8d52dba4c6440d0d4a9b193f57748d20f89ab5d6da1614362a5fb85f",
            "6ab2be35c72fd6287ae55cd277791944df24a3764671ddd4060a9b9cab014abe",
            "1435093164a69f61bf29248c359cb690ab25e993ce3972d6ee36785ef0618720",
            "50f526f7db7ff198fbacff298581b73306efc02bb9d4ab32df264f14a80e7f0c",
            "76e5f14da29ab1ea04a3e3f5ba5e35055dbad276e1201cce0aec1482cbec1d3f",
            "a4a13d3e16511b0dee3558c5aeef27e3e61b9151e55a5ae157030ce597f82182",
            "893ee4d6bd4fb08729bbc301419ce0664145ba7ab8cbc06548e1f7fdf53d0605",
            "a77be6e40c540090f98c25b125be7499f176bb8501493353cf905f72250062d6",
            "cf0188148246ee94ef9b21adb7ae1ae73bb6e68fa91d7fb49828d657d8195f6e",
            "95082fad",
        ),
        c_out: concat!(
            "af4d97fb7228f01f6d9e2f79a1a1ba45a23d609059784ea9350f1eb092b054a3",
            "268cc026d3d737ef35adc286d195eaa414493ed2a51f2f61099a3451f9555bab",
            "1a5ef3e3fbbe8ec6416bd33d50dff98f",
        ),
    },
    PublishedNoteVector {
        ovk: "147dd11d77eba1b1636fd6190c62b9a5d0481bee7e917fab02e21858063ab504",
        ivk: "99c9b4b84f4b4e350f787d1cf7051d50ecc34b1a5b20d2d2139b4af1f160e001",
        default_d: "21c90e1c658b3efe86af58",
        default_pk_d: "9e64174b4ab981405c323b5e12475945a46d4fedf8060828041cd20e62fd2cef",
        v: 900000000,
        rcm: "8c3e56449dc86354d33b025ef2793460bcb169f3324e4a6b64baa60832315704",
        memo: "f6",
        cv: "4a85eb3f253f3baaf6b55a994951b2ca8248cbd679f7a577e33bcd6646b21351",
        cmu: "5690cd51a45ce89a51acbe016060f0dfee0d2fc9b897585f974a402e537fe218",
        esk: "a53d19f5694595d5ae630227673c80249ce124419f46df4e7b3fc1046128cd0b",
        epk: "4dfc8a70b210dfd44837aa52d63bd5d81a5e40d8b4c17a2dca25a5f75fe5202e",
        c_enc: concat!(
            "84d36109bdd21c678e8447f889e560ef6d07a827aaab789b46c3f9eb322eea21",
            "4c20f7e9fa7f7aa5e044a4ed4cb15da9c56c32f37e4cbe7d1ed1f685a8748dbf",
            "781290f97ac14140aa8b50932a3f66c208226f8d8ec0deb7bb583572c9e970bc",
            "d0c6446726aa5b6a5f81cf18c67a992d6c860386abbb5b90be5864344fc8bf3e",
            "bb7541aa9b9e1e3f9625acce7f4bf15839a0817068e9151b637fa2a2ca09b9be",
            "285fea7e0a03317c298ad7fffe40c5f0f6e9fb44e8f06e192f1ac2108f3f11f7",
            "763cf21e96624d52f3e72aaf157f3bc7c5d18f1eba3d827f719c279fd966c27d",
            "94d74723c5311b8665bd29b3a100bb2111aa4216f0665b169ec0941768a9574a",
            "e50c2bc7900553f5c450ee9882af4455d1d8ce351849d78dbbe61ed1db7a2fd6",
            "5775d5506dfd02a94d9d4285a23a3cab8aa3321422a4aaa549274a25f7f12ff7",
            "a5195e5155739f318c30c0248c3a219a7ade7298380a595c5c885b420669cd6d",
            "eb2e5c804978cb42d20602745733607cef4e26a5c97cca1cc52b7fdc10690170",
            "18076cac62e5c4dbf9074872050a422219513bca27a835f4824f47ba337deb74",
            "40f3f2cace9e331670dd98e328ab0a16ac4ab66276d1e1018b2cf179436266a4",
            "08da8ddafc44b2276b116852d4ccb35289b4213009125d2d87845d6eb78e5503",
            "153d92fbd493d19ef01f370026baf172307b3fe2c45696fbceda3b6eab05e2b0",
            "685c72790498233abbbd6e05b0f44a7298ae0a25af08d79574614cf2d83ea79c",
            "2b7953f86cf5d04927f09c0d7df812f1cf18a453a04970af0d729ce7d9c8d6a2",
            "4d7eed3d",
        ),
        c_out: concat!(
            "bc16afa8aab2380626018ce2755867558f9d59857393a1f348b21cb50f53eaba",
            "e7f6e47b45241f6b7b3d68945dd40cadc57a9ade6af969ae074ff289bcb6610a",
            "e38c8210a5cbd747b831151c56ef02c9",
        ),
    },
    PublishedNoteVector {
        ovk: "573467a7b30ead6ccc504744ca9e1a281a0d1a08738b06a0684feacd1e9d126d",
        ivk: "db95ea8bd9f93d41b5ab2bebc91a38edd527083e2a6ef9f3c29702d5ff89ed00",
        default_d: "233c4ab886a55e3ba374c0",
        default_pk_d: "b68e9ee0c0678d7b3036931c831a25255f7ee487385a30316e15f6482b874fda",
        v: 1000000000,
        rcm: "6ebbed743619a256f9ad2e85880cfaa9098a5fdb1629990d9a7d3bb93fc90003",
        memo: "f6",
        cv: "2a547d978c7c90a8d0a5474e29dbfff34bae81e6408ec1fe2d56a25241a8e329",
        cmu: "f4ba4ef040f80d00080d29a6b399dc4032403361e0591ed61499bc068e41ed38",
        esk: "29958980694f7f67080997c2664702890cd1b503dda42d33a899ce991fe0f800",
        epk: "ea6b3c985f33b2a22d0dbf7cd93019fd9e57316c85b7674954629c77dfaec066",
        c_enc: concat!(
            "149a52f8f5342b44848891f885d3cd099abe805aa5091fe1710eb73502de387d",
            "f3f9646722e8b85c377c822a7103347c8101e9ae8c3182ca36dafd758d96ceba",
            "48327a098286a4e8321d1e74fe3d6159c029483de9eef3b24d85e4d516b8704f",
            "8e7d93e74442ed007ad79a6152f2b6642fbee60435e19209d811c66c17b7df3d",
            "fd769fb5c7d006b36742bbe726929e879b116d3613571aa63ac2ccca43f8900b",
            "893e64dd0b8ff91ec5114082e6d00cf93a7cfa7518bb7fb64a7f346420b64478",
            "d71869e91d4797901fa86e70b2201afe4bd3ea5503816fac687d81252f65616e",
            "7fb26846521e39ff94be73b8aca804c65cf94e3256bd3c69ad318e6b28551948",
            "7793ee29885140f0bc00845f67415f670f04ca818c5f3249d3fb70bfea10c625",
            "eb8cf2cab3f583622a21a38b8fe51a5ff2919ef4c1bd9830a9f2486abd885dd9",
            "43b94edc8f88c8b78a5eb031f34b7d931c8753afd9768d0fa8d26e88c9567ad5",
            "8923e7b0afbdaadf477bd1d23fc40a42c29b4d5fe1087645ddfdeba0c7d56715",
            "cd57f0d1741a3d9cb38d88d647b1c5b24addbad1acfa3a8da37a74260555ec0d",
            "ea88ed2c7f46dd87b3f279a96a0e7854ec4a79ceadc74a680fc82d75aec7f2d1",
            "3dfb62235057e4f7dc5b07c6baba82b32fe90b5c6e9dc6b2fb33beac880d3a60",
            "ba0848fac6619da8ca33a63294eb63d0f24cbb1e031782880ffa18356c98762c",
            "cdd3afab81f19abf3bdd2bc43cb1f2155caf6498894e068ba749c976ec23f211",
            "622614607856d87b741624f7f83495d7de4d6de208e13574c82a1b8b1cfe87e9",
            "18e7b396",
        ),
        c_out: concat!(
            "e27a464d6f44cc44f617e23c9fb1b71fffd46aebf03677cf7dd24d711ba0c6ca",
            "3853097b247ab74c15bb938ed602fbcd30f4a65956430f47a0fbcbe8e08aada3",
            "8630785a805753ba33b334cd2a4bfc3d",
        ),
    },
];

/// Memo bytes, zero padded to 512
pub fn memo_bytes(vector: &NoteVector) -> [u8; 512] {
    pad_memo(vector.memo)
}

/// Zero pad a hex memo prefix to 512 bytes
pub fn pad_memo(prefix: &str) -> [u8; 512] {
    let mut memo = [0u8; 512];
    let prefix = hex::decode(prefix).expect("vector memo hex");
    memo[..prefix.len()].copy_from_slice(&prefix);
    memo
}

/// Decode a fixed-size hex vector
pub fn bytes<const N: usize>(s: &str) -> [u8; N] {
    let v = hex::decode(s).expect("vector hex");
    v.try_into().expect("vector length")
}
