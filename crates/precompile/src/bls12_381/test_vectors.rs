//! Encoded points shared by the BLS12-381 precompile tests.

use alloy_primitives::hex;

/// Generator of G1.
pub(crate) const G1: [u8; 128] = hex!(
    "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
    "0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"
);

/// `2 * G1`.
pub(crate) const G1_2: [u8; 128] = hex!(
    "000000000000000000000000000000000572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e"
    "00000000000000000000000000000000166a9d8cabc673a322fda673779d8e3822ba3ecb8670e461f73bb9021d5fd76a4c56d9d4cd16bd1bba86881979749d28"
);

/// `3 * G1`.
pub(crate) const G1_3: [u8; 128] = hex!(
    "0000000000000000000000000000000009ece308f9d1f0131765212deca99697b112d61f9be9a5f1f3780a51335b3ff981747a0b2ca2179b96d2c0c9024e5224"
    "00000000000000000000000000000000032b80d3a6f5b09f8a84623389c5f80ca69a0cddabc3097f9d9c27310fd43be6e745256c634af45ca3473b0590ae30d1"
);

/// `8 * G1`.
pub(crate) const G1_8: [u8; 128] = hex!(
    "00000000000000000000000000000000085ae765588126f5e860d019c0e26235f567a9c0c0b2d8ff30f3e8d436b1082596e5e7462d20f5be3764fd473e57f9cf"
    "0000000000000000000000000000000019e7dfab8a794b6abb9f84e57739de172a63415273f460d1607fa6a74f0acd97d9671b801dd1fd4f18232dd1259359a1"
);

/// `0x11138ce750fa15c2 * G1`.
pub(crate) const G1_K: [u8; 128] = hex!(
    "000000000000000000000000000000000c0996c2d806e3fef3fdd3f73891e7fddb4c06682a73d74caaee9102cbf41ea368526565a7878bc8904621aac1c0bdc4"
    "000000000000000000000000000000000b5282ae5de4f5acd931a9dfb6203b589bb2056ae57dcfa28cbfc4381b53fe98950ca22798b55557e0b526e5682190dd"
);

/// `-G1`.
pub(crate) const NEG_G1: [u8; 128] = hex!(
    "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
    "00000000000000000000000000000000114d1d6855d545a8aa7d76c8cf2e21f267816aef1db507c96655b9d5caac42364e6f38ba0ecb751bad54dcd6b939c2ca"
);

/// `(4, y)`, on the curve but outside the order `r` subgroup.
pub(crate) const G1_NOT_IN_SUBGROUP: [u8; 128] = hex!(
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004"
    "000000000000000000000000000000000a989badd40d6212b33cffc3f3763e9bc760f988c9926b26da9dd85e928483446346b8ed00e1de5d5ea93e354abe706c"
);

/// Generator of G2.
pub(crate) const G2: [u8; 256] = hex!(
    "00000000000000000000000000000000024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"
    "0000000000000000000000000000000013e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"
    "000000000000000000000000000000000ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"
    "000000000000000000000000000000000606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"
);

/// `2 * G2`.
pub(crate) const G2_2: [u8; 256] = hex!(
    "000000000000000000000000000000001638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a053"
    "000000000000000000000000000000000a4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c33577"
    "000000000000000000000000000000000468fb440d82b0630aeb8dca2b5256789a66da69bf91009cbfe6bd221e47aa8ae88dece9764bf3bd999d95d71e4c9899"
    "000000000000000000000000000000000f6d4552fa65dd2638b361543f887136a43253d9c66c411697003f7a13c308f5422e1aa0a59c8967acdefd8b6e36ccf3"
);

/// `3 * G2`.
pub(crate) const G2_3: [u8; 256] = hex!(
    "00000000000000000000000000000000122915c824a0857e2ee414a3dccb23ae691ae54329781315a0c75df1c04d6d7a50a030fc866f09d516020ef82324afae"
    "0000000000000000000000000000000009380275bbc8e5dcea7dc4dd7e0550ff2ac480905396eda55062650f8d251c96eb480673937cc6d9d6a44aaa56ca66dc"
    "000000000000000000000000000000000b21da7955969e61010c7a1abc1a6f0136961d1e3b20b1a7326ac738fef5c721479dfd948b52fdf2455e44813ecfd892"
    "0000000000000000000000000000000008f239ba329b3967fe48d718a36cfe5f62a7e42e0bf1c1ed714150a166bfbd6bcf6b3b58b975b9edea56d53f23a0e849"
);

/// `8 * G2`.
pub(crate) const G2_8: [u8; 256] = hex!(
    "0000000000000000000000000000000002142a58bae275564a6d63cb6bd6266ca66bef07a6ab8ca37b9d0ba2d4effbccfd89c169649f7d0e8a3eb006846579ad"
    "0000000000000000000000000000000012be651a5fa620340d418834526d37a8c932652345400b4cd9d43c8f41c080f41a6d9558118ebeab9d4268bb73e850e1"
    "0000000000000000000000000000000015f4b235c209d89ce833f8f296e4cfb748e8abce6990ce1a5a914b9416c08e0d3a26db89625915c821a5f152b7fa592e"
    "0000000000000000000000000000000006fcacb3ee6650a1044852d61c9c20bedc8ee90aad97de8e24670a9ef57483e678db11dd95428915088d76e30cb01a37"
);

/// `0x11138ce750fa15c2 * G2`.
pub(crate) const G2_K: [u8; 256] = hex!(
    "000000000000000000000000000000001557c8546cbd800140b1863b8512edcb4099c22912efc6de6ef2bcec314a63a7813db3c40b676555c24466efcf9962ec"
    "000000000000000000000000000000000be884636cc7774f5dde7b37dbb22e55186e502b3405f3ae04ecffa76788f39e8f3c0cb017b67bed0d6da817dfd66464"
    "0000000000000000000000000000000012fe4c3a338f21128f2339a5c7ef0b4048a0f1b1e52d28f4fb2f943e5b881d6272b207625b76b9a11d8cb8257c486300"
    "00000000000000000000000000000000151d5b574355c37c554c4791a543ac987c0297ec26e24daefa55c7c37c4cc4d7024ebf71aa1ed3337a87af8960c68cde"
);

/// `(2, y)`, on the twist but outside the order `r` subgroup.
pub(crate) const G2_NOT_IN_SUBGROUP: [u8; 256] = hex!(
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002"
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"
    "0000000000000000000000000000000018c6b864ae17dc9da64203ffefb966306425a7bc6aeb7c75247438372716284a4173830420cd476ba1a365b95bfcec38"
    "00000000000000000000000000000000172e93db764a8400a7d5071b6b6f5de0da2f0f4a063119abca014006b7c40a2cfe291a1924e65db0d6d0fcfbf3bf3d5c"
);


/// Appends a 32 byte big-endian scalar to an encoded point.
pub(crate) fn with_scalar(point: &[u8], scalar: u64) -> std::vec::Vec<u8> {
    let mut out = point.to_vec();
    out.extend_from_slice(&crate::scalar::Scalar::from_u64(scalar).to_be_bytes());
    out
}
