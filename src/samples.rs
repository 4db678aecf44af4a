//! Built-in sample cryptograms, used by the CLI when no text is given and by
//! the local benchmark.

pub static SAMPLE_CRYPTOGRAMS: [&str; 12] = [
    "Xesmzdhmbebj nwramj tnqjazy qxuejj maz xedhbmzu'j xesjenz. \
     - Awmxaawfzu'j Rbwyz me maz Rqnqcp",
    "Svg xvbcg hebycgj xdsv svg xbecq di svls rbbci lkq rlklsdwi \
     leg lcxlpi ib wgesldk br svgjigcfgi, yos xdige hgbhcg ib rocc \
     br qboysi. - Ygeselkq Eoiigcc",
    "Xkdn fgknc qhu fczch ycqnf qtk kdn xqvjcnf rnkdtjv xknvj kh vjlf gkhvlhchv, \
     q hci hqvlkh, gkhgclzcu lh Olrcnvy, qhu uculgqvcu vk vjc pnkpkflvlkh vjqv \
     qoo sch qnc gncqvcu cmdqo.",
    "V mvxegc nk v rgiizh hyz igxdk pzq ynk qlmcgiiv hygx ayg kqx nk kynxnxo vxd \
     hvxak na mvue ayg lnxqag na mgonxk az cvnx.- Lvce Ahvnx",
    "E lhcnsml efo isso vxndslsvxnked ascb ksmdo yh acnwwhf ksflnlwnfi \
     hfwnchdj sg psbhl.",
    "Wzb eit uaytx zw xfd fx vtaei, hke eit yfwe zw yzv fx tetbdal lfwt \
     fd jibfxe otxkx zkb lzbv",
    "P jnpyk mipga shlx. Jna necix hia teez, lec gaaj h bej ev pyjaiaxjpyt \
     saesba, lec jihdab h bej.",
    "Fkl nbpvyswn gwqew bh vihswlhh yqqgh esfk bihflul jshdboqu itqw fkl \
     vihswlhh gwqew bh nbpvyswn.",
    "Rm lphgmemw lpw hlaw, grmcrme rm tm l happme je pj, A ipjg pjc: jpm \
     crapy A ipjg, crlc, grmemlh A glh txapw, pjg A hmm.",
    "Ma wnq ilw gxr igeo g jgi gzgli in koo pnc mi cnlek, ipo amlki ipmxt \
     wnq pgyo nx wnql pgxrk mk g xnxcnlemxt jgi",
    "Aqlcqrpj pmjf gd wquffdk slq adlatd fl qdrz, rkz lktn ukvuzdkfrttn \
     slq prvhukdj fl dxdvmfd.",
    "Ydi apccbnbxdfvi yklydnxk fxnudjvjei ba bdkbafbdepbauywvx chjo oyebn.",
];
