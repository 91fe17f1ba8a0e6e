//! TEOS-10 Gibbs function coefficients.
//!
//! `PURE_WATER` holds `g_0jk` of the IAPWS-09 pure-water polynomial and `SALINE`
//! holds `g_ijk` (i >= 2) of the IAPWS-08 saline polynomial, both in the reduced
//! variables `x = sqrt(sfac * SA)`, `y = t / 40`, `z = p / 1e4`.
#![allow(clippy::inconsistent_digit_grouping, clippy::excessive_precision)]

/// `(j, k, g_0jk)`: coefficient of `y^j z^k` in the pure-water part.
pub const PURE_WATER: [(i32, i32, f64); 41] = [
    (0, 0, 101.342_743_139_674),
    (0, 1, 100_015.695_367_145),
    (0, 2, -2_544.576_542_036_3),
    (0, 3, 284.517_778_446_287),
    (0, 4, -33.314_675_425_361_1),
    (0, 5, 4.202_631_088_030_84),
    (0, 6, -0.546_428_511_471_039),
    (1, 0, 5.905_783_479_094_02),
    (1, 1, -270.983_805_184_062),
    (1, 2, 776.153_611_613_101),
    (1, 3, -196.512_550_881_22),
    (1, 4, 28.979_652_629_417_5),
    (1, 5, -2.132_900_835_183_27),
    (2, 0, -12_357.785_933_039),
    (2, 1, 1_455.036_454_046_8),
    (2, 2, -756.558_385_769_359),
    (2, 3, 273.479_662_323_528),
    (2, 4, -55.560_406_381_721_8),
    (2, 5, 4.344_206_719_171_97),
    (3, 0, 736.741_204_151_612),
    (3, 1, -672.507_783_145_07),
    (3, 2, 499.360_390_819_152),
    (3, 3, -239.545_330_654_412),
    (3, 4, 48.801_251_859_387_2),
    (3, 5, -1.663_071_062_089_05),
    (4, 0, -148.185_936_433_658),
    (4, 1, 397.968_445_406_972),
    (4, 2, -301.815_380_621_876),
    (4, 3, 152.196_371_733_841),
    (4, 4, -26.374_837_723_280_2),
    (5, 0, 58.025_912_584_257_1),
    (5, 1, -194.618_310_617_595),
    (5, 2, 120.520_654_902_025),
    (5, 3, -55.272_305_234_015_2),
    (5, 4, 6.481_906_680_772_21),
    (6, 0, -18.984_384_651_417_2),
    (6, 1, 63.511_393_664_178_5),
    (6, 2, -22.289_731_714_045_9),
    (6, 3, 8.170_605_418_181_12),
    (7, 0, 3.050_816_464_879_67),
    (7, 1, -9.631_081_193_930_62),
];

/// `(i, j, k, g_ijk)`: coefficient of `x^i y^j z^k` in the saline part.
pub const SALINE: [(i32, i32, i32, f64); 62] = [
    (2, 0, 0, 1_416.276_484_841_97),
    (2, 0, 1, -3_310.491_540_448_39),
    (2, 0, 2, 384.794_152_978_599),
    (2, 0, 3, -96.532_432_010_745_8),
    (2, 0, 4, 15.840_817_276_682_4),
    (2, 0, 5, -2.624_801_565_909_92),
    (2, 1, 0, 168.072_408_311_545),
    (2, 1, 1, 729.116_529_735_046),
    (2, 1, 2, -343.956_902_961_561),
    (2, 1, 3, 124.687_671_116_248),
    (2, 1, 4, -31.656_964_386_073),
    (2, 1, 5, 7.046_588_033_154_49),
    (2, 2, 0, 880.031_352_997_204),
    (2, 2, 1, -860.764_303_783_977),
    (2, 2, 2, 337.409_530_269_367),
    (2, 2, 3, -178.314_556_207_638),
    (2, 2, 4, 44.204_035_830_8),
    (2, 2, 5, -7.920_015_472_116_82),
    (2, 3, 0, -225.267_649_263_401),
    (2, 3, 1, 694.244_814_133_268),
    (2, 3, 2, -204.889_641_964_903),
    (2, 3, 3, 113.561_697_840_594),
    (2, 3, 4, -11.128_273_432_641_3),
    (2, 4, 0, 91.426_044_775_125_9),
    (2, 4, 1, -297.728_741_987_187),
    (2, 4, 2, 74.726_141_138_756),
    (2, 4, 3, -36.487_291_900_158_8),
    (2, 5, 0, -21.660_324_087_531_1),
    (2, 6, 0, 2.130_169_708_471_83),
    (3, 0, 0, -2_432.146_623_817_94),
    (3, 0, 1, 199.459_603_073_901),
    (3, 0, 2, -52.294_090_928_133_5),
    (3, 0, 3, 68.044_494_272_645_9),
    (3, 0, 4, -3.412_519_324_412_82),
    (3, 1, 0, -493.407_510_141_682),
    (3, 1, 1, -175.292_041_186_547),
    (3, 1, 2, 83.192_392_780_181_9),
    (3, 1, 3, -29.483_064_349_429),
    (3, 2, 0, -43.066_467_597_804_2),
    (3, 2, 1, 383.058_066_002_476),
    (3, 2, 2, -54.191_726_251_711_2),
    (3, 2, 3, 25.639_848_738_991_4),
    (3, 3, 0, -10.022_737_086_187_5),
    (3, 3, 1, -460.319_931_801_257),
    (3, 4, 0, 0.875_600_661_808_945),
    (3, 4, 1, 234.565_187_611_355),
    (4, 0, 0, 2_025.801_156_036_97),
    (4, 0, 1, -54.791_913_353_288_7),
    (4, 0, 2, -4.081_939_789_122_61),
    (4, 0, 3, -30.175_511_197_116_1),
    (4, 1, 0, 543.835_333_000_098),
    (4, 1, 1, -22.668_355_851_282_9),
    (4, 2, 0, -68.557_250_920_449_1),
    (4, 3, 0, 49.366_769_485_625_4),
    (4, 4, 0, -17.139_757_741_978_8),
    (4, 5, 0, 2.496_970_095_695_08),
    (5, 0, 0, -1_091.668_410_429_67),
    (5, 0, 1, 36.028_419_561_108_6),
    (5, 1, 0, -196.028_306_689_776),
    (6, 0, 0, 374.601_237_877_84),
    (6, 1, 0, 36.757_162_299_580_5),
    (7, 0, 0, -48.589_106_902_540_9),
];

/// `g_100`: coefficient of `x^2 ln x`.
pub const LOG_X: f64 = 5_812.814_566_267_32;
/// `g_110`: coefficient of `x^2 y ln x`.
pub const LOG_XY: f64 = 851.226_734_946_706;
