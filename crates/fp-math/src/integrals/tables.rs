//! Tabulated Gauss-Legendre nodes and weights on [−1, 1].
//!
//! Nodes are the roots of the Legendre polynomial of matching degree in
//! ascending order, weights are `2 / ((1 − x²) P'ₙ(x)²)`. Values were
//! computed in 50-digit arithmetic and rounded to the nearest `f64`.

use super::gauss_legendre::GaussLegendreRule;

/// Gauss-Legendre rule with 8 nodes.
pub static GAUSS_LEGENDRE_8: GaussLegendreRule<8> = GaussLegendreRule {
    nodes: [
        -0.960_289_856_497_536_3,
        -0.796_666_477_413_626_7,
        -0.525_532_409_916_329,
        -0.183_434_642_495_649_8,
        0.183_434_642_495_649_8,
        0.525_532_409_916_329,
        0.796_666_477_413_626_7,
        0.960_289_856_497_536_3,
    ],
    weights: [
        0.101_228_536_290_376_26,
        0.222_381_034_453_374_48,
        0.313_706_645_877_887_27,
        0.362_683_783_378_362,
        0.362_683_783_378_362,
        0.313_706_645_877_887_27,
        0.222_381_034_453_374_48,
        0.101_228_536_290_376_26,
    ],
};

/// Gauss-Legendre rule with 16 nodes.
pub static GAUSS_LEGENDRE_16: GaussLegendreRule<16> = GaussLegendreRule {
    nodes: [
        -0.989_400_934_991_649_9,
        -0.944_575_023_073_232_6,
        -0.865_631_202_387_831_8,
        -0.755_404_408_355_003,
        -0.617_876_244_402_643_8,
        -0.458_016_777_657_227_37,
        -0.281_603_550_779_258_9,
        -0.095_012_509_837_637_44,
        0.095_012_509_837_637_44,
        0.281_603_550_779_258_9,
        0.458_016_777_657_227_37,
        0.617_876_244_402_643_8,
        0.755_404_408_355_003,
        0.865_631_202_387_831_8,
        0.944_575_023_073_232_6,
        0.989_400_934_991_649_9,
    ],
    weights: [
        0.027_152_459_411_754_096,
        0.062_253_523_938_647_894,
        0.095_158_511_682_492_79,
        0.124_628_971_255_533_88,
        0.149_595_988_816_576_74,
        0.169_156_519_395_002_54,
        0.182_603_415_044_923_58,
        0.189_450_610_455_068_5,
        0.189_450_610_455_068_5,
        0.182_603_415_044_923_58,
        0.169_156_519_395_002_54,
        0.149_595_988_816_576_74,
        0.124_628_971_255_533_88,
        0.095_158_511_682_492_79,
        0.062_253_523_938_647_894,
        0.027_152_459_411_754_096,
    ],
};

/// Gauss-Legendre rule with 24 nodes.
pub static GAUSS_LEGENDRE_24: GaussLegendreRule<24> = GaussLegendreRule {
    nodes: [
        -0.995_187_219_997_021_3,
        -0.974_728_555_971_309_5,
        -0.938_274_552_002_732_8,
        -0.886_415_527_004_401_1,
        -0.820_001_985_973_903,
        -0.740_124_191_578_554_4,
        -0.648_093_651_936_975_5,
        -0.545_421_471_388_839_6,
        -0.433_793_507_626_045_1,
        -0.315_042_679_696_163_4,
        -0.191_118_867_473_616_3,
        -0.064_056_892_862_605_63,
        0.064_056_892_862_605_63,
        0.191_118_867_473_616_3,
        0.315_042_679_696_163_4,
        0.433_793_507_626_045_1,
        0.545_421_471_388_839_6,
        0.648_093_651_936_975_5,
        0.740_124_191_578_554_4,
        0.820_001_985_973_903,
        0.886_415_527_004_401_1,
        0.938_274_552_002_732_8,
        0.974_728_555_971_309_5,
        0.995_187_219_997_021_3,
    ],
    weights: [
        0.012_341_229_799_987_2,
        0.028_531_388_628_933_663,
        0.044_277_438_817_419_81,
        0.059_298_584_915_436_78,
        0.073_346_481_411_080_3,
        0.086_190_161_531_953_27,
        0.097_618_652_104_113_88,
        0.107_444_270_115_965_63,
        0.115_505_668_053_725_6,
        0.121_670_472_927_803_39,
        0.125_837_456_346_828_3,
        0.127_938_195_346_752_16,
        0.127_938_195_346_752_16,
        0.125_837_456_346_828_3,
        0.121_670_472_927_803_39,
        0.115_505_668_053_725_6,
        0.107_444_270_115_965_63,
        0.097_618_652_104_113_88,
        0.086_190_161_531_953_27,
        0.073_346_481_411_080_3,
        0.059_298_584_915_436_78,
        0.044_277_438_817_419_81,
        0.028_531_388_628_933_663,
        0.012_341_229_799_987_2,
    ],
};

/// Gauss-Legendre rule with 32 nodes.
pub static GAUSS_LEGENDRE_32: GaussLegendreRule<32> = GaussLegendreRule {
    nodes: [
        -0.997_263_861_849_481_6,
        -0.985_611_511_545_268_4,
        -0.964_762_255_587_506_4,
        -0.934_906_075_937_739_7,
        -0.896_321_155_766_052_1,
        -0.849_367_613_732_57,
        -0.794_483_795_967_942_4,
        -0.732_182_118_740_289_7,
        -0.663_044_266_930_215_2,
        -0.587_715_757_240_762_3,
        -0.506_899_908_932_229_4,
        -0.421_351_276_130_635_33,
        -0.331_868_602_282_127_67,
        -0.239_287_362_252_137_06,
        -0.144_471_961_582_796_5,
        -0.048_307_665_687_738_32,
        0.048_307_665_687_738_32,
        0.144_471_961_582_796_5,
        0.239_287_362_252_137_06,
        0.331_868_602_282_127_67,
        0.421_351_276_130_635_33,
        0.506_899_908_932_229_4,
        0.587_715_757_240_762_3,
        0.663_044_266_930_215_2,
        0.732_182_118_740_289_7,
        0.794_483_795_967_942_4,
        0.849_367_613_732_57,
        0.896_321_155_766_052_1,
        0.934_906_075_937_739_7,
        0.964_762_255_587_506_4,
        0.985_611_511_545_268_4,
        0.997_263_861_849_481_6,
    ],
    weights: [
        0.007_018_610_009_470_096,
        0.016_274_394_730_905_67,
        0.025_392_065_309_262_06,
        0.034_273_862_913_021_43,
        0.042_835_898_022_226_68,
        0.050_998_059_262_376_175,
        0.058_684_093_478_535_544,
        0.065_822_222_776_361_85,
        0.072_345_794_108_848_5,
        0.078_193_895_787_070_31,
        0.083_311_924_226_946_75,
        0.087_652_093_004_403_81,
        0.091_173_878_695_763_89,
        0.093_844_399_080_804_57,
        0.095_638_720_079_274_86,
        0.096_540_088_514_727_8,
        0.096_540_088_514_727_8,
        0.095_638_720_079_274_86,
        0.093_844_399_080_804_57,
        0.091_173_878_695_763_89,
        0.087_652_093_004_403_81,
        0.083_311_924_226_946_75,
        0.078_193_895_787_070_31,
        0.072_345_794_108_848_5,
        0.065_822_222_776_361_85,
        0.058_684_093_478_535_544,
        0.050_998_059_262_376_175,
        0.042_835_898_022_226_68,
        0.034_273_862_913_021_43,
        0.025_392_065_309_262_06,
        0.016_274_394_730_905_67,
        0.007_018_610_009_470_096,
    ],
};

/// Gauss-Legendre rule with 48 nodes.
pub static GAUSS_LEGENDRE_48: GaussLegendreRule<48> = GaussLegendreRule {
    nodes: [
        -0.998_771_007_252_426_1,
        -0.993_530_172_266_350_8,
        -0.984_124_583_722_826_9,
        -0.970_591_592_546_247_3,
        -0.952_987_703_160_430_9,
        -0.931_386_690_706_554_3,
        -0.905_879_136_715_569_6,
        -0.876_572_020_274_247_9,
        -0.843_588_261_624_393_5,
        -0.807_066_204_029_442_6,
        -0.767_159_032_515_740_4,
        -0.724_034_130_923_814_6,
        -0.677_872_379_632_663_9,
        -0.628_867_396_776_513_6,
        -0.577_224_726_083_972_7,
        -0.523_160_974_722_233,
        -0.466_902_904_750_958_4,
        -0.408_686_481_990_716_7,
        -0.348_755_886_292_160_75,
        -0.287_362_487_355_455_55,
        -0.224_763_790_394_689_05,
        -0.161_222_356_068_891_7,
        -0.097_004_699_209_462_7,
        -0.032_380_170_962_869_36,
        0.032_380_170_962_869_36,
        0.097_004_699_209_462_7,
        0.161_222_356_068_891_7,
        0.224_763_790_394_689_05,
        0.287_362_487_355_455_55,
        0.348_755_886_292_160_75,
        0.408_686_481_990_716_7,
        0.466_902_904_750_958_4,
        0.523_160_974_722_233,
        0.577_224_726_083_972_7,
        0.628_867_396_776_513_6,
        0.677_872_379_632_663_9,
        0.724_034_130_923_814_6,
        0.767_159_032_515_740_4,
        0.807_066_204_029_442_6,
        0.843_588_261_624_393_5,
        0.876_572_020_274_247_9,
        0.905_879_136_715_569_6,
        0.931_386_690_706_554_3,
        0.952_987_703_160_430_9,
        0.970_591_592_546_247_3,
        0.984_124_583_722_826_9,
        0.993_530_172_266_350_8,
        0.998_771_007_252_426_1,
    ],
    weights: [
        0.003_153_346_052_305_838_5,
        0.007_327_553_901_276_262_5,
        0.011_477_234_579_234_54,
        0.015_579_315_722_943_849,
        0.019_616_160_457_355_53,
        0.023_570_760_839_324_38,
        0.027_426_509_708_356_948,
        0.031_167_227_832_798_09,
        0.034_777_222_564_770_44,
        0.038_241_351_065_830_71,
        0.041_545_082_943_464_75,
        0.044_674_560_856_694_28,
        0.047_616_658_492_490_48,
        0.050_359_035_553_854_47,
        0.052_890_189_485_193_67,
        0.055_199_503_699_984_165,
        0.057_277_292_100_403_214,
        0.059_114_839_698_395_635,
        0.060_704_439_165_893_88,
        0.062_039_423_159_892_665,
        0.063_114_192_286_254_02,
        0.063_924_238_584_648_19,
        0.064_466_164_435_950_09,
        0.064_737_696_812_683_92,
        0.064_737_696_812_683_92,
        0.064_466_164_435_950_09,
        0.063_924_238_584_648_19,
        0.063_114_192_286_254_02,
        0.062_039_423_159_892_665,
        0.060_704_439_165_893_88,
        0.059_114_839_698_395_635,
        0.057_277_292_100_403_214,
        0.055_199_503_699_984_165,
        0.052_890_189_485_193_67,
        0.050_359_035_553_854_47,
        0.047_616_658_492_490_48,
        0.044_674_560_856_694_28,
        0.041_545_082_943_464_75,
        0.038_241_351_065_830_71,
        0.034_777_222_564_770_44,
        0.031_167_227_832_798_09,
        0.027_426_509_708_356_948,
        0.023_570_760_839_324_38,
        0.019_616_160_457_355_53,
        0.015_579_315_722_943_849,
        0.011_477_234_579_234_54,
        0.007_327_553_901_276_262_5,
        0.003_153_346_052_305_838_5,
    ],
};
