//! ECDSA verification test vectors.

use hex_literal::hex;

/// ECDSA verification test vector over a prehashed message.
#[derive(Clone, Copy, Debug)]
pub struct TestVector {
    /// Message prehash (big-endian, any length).
    pub m: &'static [u8],

    /// Public key x-coordinate.
    pub q_x: &'static [u8],

    /// Public key y-coordinate.
    pub q_y: &'static [u8],

    /// Signature `r` component.
    pub r: &'static [u8],

    /// Signature `s` component.
    pub s: &'static [u8],
}

/// SHA-256 digest shared by [`P256_VERIFY`] and [`P192_VERIFY`].
pub const DIGEST: [u8; 32] =
    hex!("0caa08b4f089d345bb5598d9c2e9655d7ea3a9c3cd69b1cf91be5810fe80656e");

/// ECDSA/P-256 signature over [`DIGEST`].
pub const P256_VERIFY: TestVector = TestVector {
    m: &DIGEST,
    q_x: &hex!("cb59de9cbb28aaac7206c3432a6582cc68017668fcecf591d19ebfcf677d7dbe"),
    q_y: &hex!("00661474e00644666f3b8c3b2d05f6d5b25de4856c6138c5b121de2b44f51362"),
    r: &hex!("261a0fbda5e51ee7b3c3b709d14a7a2a16694baf765cd40e9357b867f9a1e5e8"),
    s: &hex!("6359c03b6ac2c4c4af475ce66d433ba7915115627e460e6884ce72a0d88b69d5"),
};

/// ECDSA/P-192 signature over [`DIGEST`].
///
/// The digest is wider than the group order, so only its leftmost 24 bytes
/// enter the verification equation.
pub const P192_VERIFY: TestVector = TestVector {
    m: &DIGEST,
    q_x: &hex!("d03f6fe75daaf4c01e637b82ab2333347459565d21109cb1"),
    q_y: &hex!("85fc76cb65bcc4be7409fdf374dcc2de7e4b23ad465c87c2"),
    r: &hex!("2b8a182fb27526b71ce1e26daae7742c42c8d5094fb7ee9f"),
    s: &hex!("1a74b405f428a5b6ceeda5ffa860062ff6eb245924305b12"),
};

/// ECDSA/P-192 test vectors.
///
/// Adapted from the FIPS 186-2 ECDSA test vectors
/// (P-192, SHA-1, from `SigGen.txt` in `186-2ecdsatestvectors.zip`)
/// <https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/digital-signatures>
///
/// The `m` field contains a SHA-1 prehash left-padded to 24 bytes.
pub const P192_FIPS_186_2: &[TestVector; 15] = &[
    TestVector {
        m: &hex!("000000005c8190e87adb631bb5537f3f5f478888bd002ff5"),
        q_x: &hex!("14f69738599689f5706ab71343becc886ef1569a2d1137fe"),
        q_y: &hex!("0cf5a433909e33217fb4df6b9593f71d43fb1c2a5653b763"),
        r: &hex!("af1f749e3df6220ff04efd178618a977e0838b1b9dc126e3"),
        s: &hex!("8990a04c6cc0ff26264ecf8f7831381a9dbc6e53cc8cc860"),
    },
    TestVector {
        m: &hex!("00000000005e97fa0177ffff868cdac356508e22cbe730d2"),
        q_x: &hex!("386afa71afc065019f3d2021ead531ed1d365887122d2d4b"),
        q_y: &hex!("bbfb6e9cdb32c2252015acfb4cfb049b08b4cb279c64928a"),
        r: &hex!("337be42eebdcedd97678eeaae9d1b231b740a191a293c22a"),
        s: &hex!("9d6766b391e95f649e05442453a85466da29eaa97ddcfc62"),
    },
    TestVector {
        m: &hex!("00000000619c5a0cea316912adbf92a8212bad2187453bc6"),
        q_x: &hex!("3b1c19d73b6a4d7a12003530a54ae0f5ba18d75c98a0db95"),
        q_y: &hex!("afb8bd8c94c6e3d5dc050e3641c0fad771557ce97f5f3dba"),
        r: &hex!("e36d5dbb9560d959814cbd30aa6a405da9652fbd250da9ab"),
        s: &hex!("f2db3d62733f6d08b08ef0682f579ac527950117f39e474b"),
    },
    TestVector {
        m: &hex!("00000000179a36aa602e23665295d895581fe44b138da3dc"),
        q_x: &hex!("21933e6e8cdcfff62f36c45e83dece1280a888663a34608f"),
        q_y: &hex!("565890e37fdf563595d24524ef1da9aae246892e75a74234"),
        r: &hex!("1791e503645e53a8304f2a44715942c6aab315b0086f4147"),
        s: &hex!("366309b7f79b2fd98d6c2f3a8424178b01235041f9869552"),
    },
    TestVector {
        m: &hex!("00000000a35b163e77befe4fc68f61c328e309f41b196004"),
        q_x: &hex!("4828ad4aff5d87dcca98a341344a462edf277850755c7277"),
        q_y: &hex!("8a1bfc6b7b0424e15454ac198d4d697927f4eaaf9d14d88e"),
        r: &hex!("c438ca66c5d3b19e2bcd26a5c54742435f25ee0e9364b41c"),
        s: &hex!("ff194479695afdcc88645f2a309cb99717beac26794c0658"),
    },
    TestVector {
        m: &hex!("00000000e6890e6692407724d039d4a8d4f957d5554b30fb"),
        q_x: &hex!("2f5d05cbd620145b41d0a1c656d676ead2fc651b3cf71cc2"),
        q_y: &hex!("88d2386cfb812d02a1fa19578a7cd04b356920a2b2e69839"),
        r: &hex!("cde95d12d650102c535fdc1994fc468308b05e2af7af9c14"),
        s: &hex!("c2606a54e7592214a265270918322ae33d487268b9108cae"),
    },
    TestVector {
        m: &hex!("000000008b7bc5a5967111272dc68ca86e3b72b9a493b8d3"),
        q_x: &hex!("47e8ec5e1edb1d23c04ebfeefd8cb8bf39cd48c348de3ea7"),
        q_y: &hex!("b1167b3a4e2fbe167bbd7b7b06bf1314d58d9e3976ffa47f"),
        r: &hex!("539e285389399c785dfc4f3bfccbc825602f443ae0dca3d1"),
        s: &hex!("ed56e54fbaa0b7c0bc462920314031c7a3e7b2eb701cb9db"),
    },
    TestVector {
        m: &hex!("000000003387cd04272f60f84bf82f27b154324da4abf6ed"),
        q_x: &hex!("a4db1303bf13696e26678286e27c166dd87be98cc8be2844"),
        q_y: &hex!("09b4de84bbfa77e049ace272a12d0dd141d363e74ec12511"),
        r: &hex!("6818d44aea421701e3f41600c867fb3d3749eadbf33820fa"),
        s: &hex!("658b228b2edd8569f6940fee1c303626e48181094581987b"),
    },
    TestVector {
        m: &hex!("0000000019c4f2d298c703b56791b3454a2eacb93088b6e0"),
        q_x: &hex!("270d7bb9bfab54529240426a08508f1ed90dc7914cdf11f3"),
        q_y: &hex!("c91ed7f2eca39f563757c5b518d9c28d4d41e7bdc0c7f53e"),
        r: &hex!("db20f09b69ac79e224258800ebe6cc51a2e12536b69396c8"),
        s: &hex!("d31df9544277f4a79676fdc7a51faef73ee2a0d1057ff3a2"),
    },
    TestVector {
        m: &hex!("00000000b552b660da681cb93d739f21c57ef1bf84926f5d"),
        q_x: &hex!("6a5723e72f6270160f256ddd403c108503388d4320f7926c"),
        q_y: &hex!("f52b0e0e4c8871443cfc0c231e856f6adc2a7c3318a43578"),
        r: &hex!("6505663a952b741c4583e755496740833d5901fc09433963"),
        s: &hex!("de0411972e27bfb80362b44650e687866cd202a4199d605c"),
    },
    TestVector {
        m: &hex!("00000000b2e39a27756979bd647879a4f22008b2624f8f8d"),
        q_x: &hex!("1c0e4fc6d8f4e7605f2bf57541395f5167d41d8bdd5c4f80"),
        q_y: &hex!("775da73226020bad6ec4df5022a8c61aee064372ba535ae7"),
        r: &hex!("bc540a8f5ea81c6144698f5452556f17da76a52636461d70"),
        s: &hex!("2de23f6cc9a45899a9f605dab9f28fddf9e376ea06c92db5"),
    },
    TestVector {
        m: &hex!("0000000081b29a3019476a387455b61fffd83ac83ffcd8d0"),
        q_x: &hex!("194e8fdd4b6b84f1955d1919387f96facf6feadd8105d8dd"),
        q_y: &hex!("2eb47a2ed3aac4250be37f9e31d7ff87be4043ac1eac401f"),
        r: &hex!("0bbd331b5cbcaef2b26e27bdc559d31c62d5c9b6b8979603"),
        s: &hex!("c1670a3b435805fa7ab20e6dd8ffa1012e9fb41b1d7d0176"),
    },
    TestVector {
        m: &hex!("00000000e062ee7eb959f9c7f33828b71c04a846b3dfac22"),
        q_x: &hex!("18b94fc7825bad91b1ca5a69cdf576377ad76965670d3967"),
        q_y: &hex!("0a73253d6df54d5105f0ca2f948d0686706dbd064744f7c3"),
        r: &hex!("1a813b607c0b4d71e7acdac040eb78b3795e53bc498bae85"),
        s: &hex!("67fc1124c30966473dc6a1f14ae32ec2dd860b3667c61dec"),
    },
    TestVector {
        m: &hex!("000000008d30f57068ecc59b8a3a3897a51cc1cf19b674fe"),
        q_x: &hex!("3888a94ef288ebe32b4b9b53bf2d3a85b45976583251f0ec"),
        q_y: &hex!("30156d8e0d212a66c071fb2e7b422ef1784a95dacffd9edb"),
        r: &hex!("37033150afed029fd8390716eac6500223e72154ccff9fee"),
        s: &hex!("b4e978e8d499cc1be576dea74c0dd74cafe9e794a7563172"),
    },
    TestVector {
        m: &hex!("000000008778cce9e8ad6541b9710e3f7067bc2c9cbc6541"),
        q_x: &hex!("b11956a29af6984043973e2de46d53d870e04687cae59728"),
        q_y: &hex!("c915f88aa0fa9822762cc4e60df759d189a10c486b901d5e"),
        r: &hex!("c459f7bcea050210e3369ac174ba89c823ca1b0d4c0964f6"),
        s: &hex!("04715cba9ba31c4ed9bf0be07d194e2a709294472cc60bdf"),
    },
];
